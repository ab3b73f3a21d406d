// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Product payload and cache keys
// - config.rs, error.rs, logging.rs: ambient plumbing
// - format.rs: display strings for cards and chips
// - state/: framework-free UI state (debounce, dropdown, selection, paging)
// - api/: HTTP client and query cache (reactive hook and browser runtime
//   are client-only)
// - hooks.rs, components/, pages/, app.rs: Leptos UI (client-only)
//
// Everything outside the `csr` feature builds and tests natively.

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod state;

#[cfg(feature = "csr")]
pub mod hooks;

#[cfg(feature = "csr")]
pub mod components;

#[cfg(feature = "csr")]
pub mod pages;

#[cfg(feature = "csr")]
pub mod app;

#[cfg(feature = "csr")]
pub use app::App;
