// web_app/pages/mod.rs - Page components module
//
// - SearchPage: product search with selected product cards

pub mod search;

pub use search::SearchPage;
