// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Small stateless pieces (spinner row, placeholders, labels)
// - search_input.rs: The autocomplete SearchInput widget
// - sentinel.rs: IntersectionObserver wrapper used for infinite scroll
// - product.rs: ProductCard

pub mod common;
pub mod product;
pub mod search_input;
pub mod sentinel;

pub use common::*;
pub use product::ProductCard;
pub use search_input::SearchInput;
