// web_app/config.rs - Application configuration
//
// All tunables live in one serde struct with defaults, so the app runs
// with zero configuration. The host page may override any field with an
// inline JSON block (see main.rs).

use serde::Deserialize;

use crate::web_app::error::{Result, SearchError};
use crate::web_app::model::DEFAULT_PAGE_SIZE;

/// Base URL of the product listing API
pub const DEFAULT_API_BASE_URL: &str = "http://fakestoreapi.in/api";

/// Element id of the optional inline config block in index.html
pub const CONFIG_ELEMENT_ID: &str = "product-search-config";

/// Debounce delay used when none is configured
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub api_base_url: String,
    pub page_size: u32,
    /// Quiet period before a typed query is used for filtering and fetching
    pub debounce_ms: u32,
    /// How long a fetched page is served without refetching
    pub stale_time_secs: i64,
    /// Additional attempts after a failed fetch
    pub retry: u32,
    pub retry_base_delay_ms: u64,
    pub max_retry_delay_ms: u64,
    pub allow_multiple: bool,
    pub placeholder: String,
    /// tracing-subscriber filter directive, e.g. "info,product_search=debug"
    pub log_filter: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            stale_time_secs: 180,
            retry: 2,
            retry_base_delay_ms: 1_000,
            max_retry_delay_ms: 30_000,
            allow_multiple: true,
            placeholder: "Search products...".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl SearchConfig {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(SearchError::InvalidConfig(
                "api_base_url must not be empty".to_string(),
            ));
        }
        if self.page_size == 0 {
            return Err(SearchError::InvalidConfig(
                "page_size must be positive".to_string(),
            ));
        }
        if self.debounce_ms == 0 {
            return Err(SearchError::InvalidConfig(
                "debounce_ms must be positive".to_string(),
            ));
        }
        if self.stale_time_secs < 0 {
            return Err(SearchError::InvalidConfig(
                "stale_time_secs must not be negative".to_string(),
            ));
        }
        if chrono::Duration::try_seconds(self.stale_time_secs).is_none() {
            return Err(SearchError::InvalidConfig(format!(
                "stale_time_secs {} is out of range",
                self.stale_time_secs
            )));
        }
        Ok(())
    }
}
