// web_app/state/mod.rs - Framework-independent UI state
//
// Everything the widget and page decide lives here as plain Rust so it
// can be tested without a browser. Components only wrap these in signals.

pub mod debounce;
pub mod dropdown;
pub mod results;
pub mod selection;

pub use debounce::{Debouncer, Ticket};
pub use dropdown::{filter_by_title, sentinel_index, Dropdown, DropdownView, KeyOutcome, NavKey};
pub use results::{AccumulatedResults, QueryState};
pub use selection::{SelectMode, Selection};
