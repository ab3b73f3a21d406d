// web_app/api/mod.rs - Data access for the web application
//
// client.rs talks HTTP, cache.rs wraps it with staleness, retries and
// request deduplication. The browser runtime and the reactive query hook
// only exist in the client build.

pub mod cache;
pub mod client;

#[cfg(feature = "csr")]
pub mod query;

#[cfg(feature = "csr")]
pub mod runtime;

pub use cache::{CachePolicy, QueryCache, QuerySnapshot, Runtime};
pub use client::{ProductApi, ProductSource};
