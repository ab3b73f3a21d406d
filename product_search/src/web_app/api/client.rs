// web_app/api/client.rs - HTTP client for the product listing endpoint
//
// One request shape: GET {base}/products?search=..&page=..&limit=..
// reqwest compiles to window.fetch() on wasm32 and to hyper natively.

use std::future::Future;

use serde::Serialize;

use crate::web_app::config::SearchConfig;
use crate::web_app::error::{Result, SearchError};
use crate::web_app::model::{Product, ProductsResponse, QueryKey, DEFAULT_PAGE_SIZE};

/// Anything that can produce one page of products for a cache key
pub trait ProductSource {
    fn fetch_page(&self, key: &QueryKey) -> impl Future<Output = Result<Vec<Product>>>;
}

impl<S: ProductSource + ?Sized> ProductSource for &S {
    fn fetch_page(&self, key: &QueryKey) -> impl Future<Output = Result<Vec<Product>>> {
        (**self).fetch_page(key)
    }
}

#[derive(Serialize)]
struct ProductsQuery<'a> {
    search: &'a str,
    page: u32,
    limit: u32,
}

/// Client for `GET /products`
#[derive(Clone, Debug)]
pub struct ProductApi {
    client: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl ProductApi {
    pub fn new(base_url: impl Into<String>, page_size: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            page_size,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.api_base_url.clone(), config.page_size)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url.trim_end_matches('/'))
    }

    /// Fetch one page of products matching `search`.
    ///
    /// A payload without a `products` field is an empty page. Every
    /// failure is logged here and returned as `SearchError::FetchFailed`.
    pub async fn fetch_products(&self, search: &str, page: u32, limit: u32) -> Result<Vec<Product>> {
        tracing::info!("Fetching products: search='{}', page={}, limit={}", search, page, limit);

        match self.request(search, page, limit).await {
            Ok(products) => {
                tracing::debug!("Fetched {} products for page {}", products.len(), page);
                Ok(products)
            }
            Err(e) => {
                tracing::error!("Error fetching products: {}", e);
                Err(SearchError::FetchFailed)
            }
        }
    }

    async fn request(&self, search: &str, page: u32, limit: u32) -> reqwest::Result<Vec<Product>> {
        let response = self
            .client
            .get(self.products_url())
            .query(&ProductsQuery { search, page, limit })
            .send()
            .await?
            .error_for_status()?;

        let body: ProductsResponse = response.json().await?;
        Ok(body.into_products())
    }
}

impl Default for ProductApi {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

impl ProductSource for ProductApi {
    fn fetch_page(&self, key: &QueryKey) -> impl Future<Output = Result<Vec<Product>>> {
        self.fetch_products(&key.search, key.page, self.page_size)
    }
}
