// web_app/error.rs - Error types for the product search app
//
// The UI only ever learns that a fetch failed. Underlying transport or
// decode errors are logged where they happen and then collapsed into
// `FetchFailed`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport, non-2xx status, or undecodable body
    #[error("Failed to fetch products")]
    FetchFailed,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Malformed configuration JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
