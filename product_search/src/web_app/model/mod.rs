// web_app/model/mod.rs - Shared data models
//
// These structs describe the product listing API payload and the keys
// used to cache it. They are plain data: no framework types, so the
// state and cache layers can be tested natively.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Default number of products requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Product as returned by the listing endpoint
///
/// Only `id` is required. Everything else is rendered blank when the API
/// leaves it out, so a malformed record never breaks the dropdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A `null` string decodes the same as a missing one
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    /// Minimal product with just an id and a title
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            category: None,
            brand: None,
            price: None,
            image: None,
        }
    }
}

/// Items that carry a stable identity for selection and deduplication
pub trait Keyed {
    type Key: PartialEq + Clone;

    fn key(&self) -> Self::Key;
}

impl Keyed for Product {
    type Key = u64;

    fn key(&self) -> u64 {
        self.id
    }
}

/// Response body of `GET /products`
///
/// The endpoint wraps the list in an object alongside status fields we
/// don't use. A missing `products` field decodes as an empty page.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

impl ProductsResponse {
    pub fn into_products(self) -> Vec<Product> {
        self.products.unwrap_or_default()
    }
}

/// Cache key: one entry per (search text, page)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryKey {
    pub search: String,
    /// 1-based page number
    pub page: u32,
}

impl QueryKey {
    pub fn new(search: impl Into<String>, page: u32) -> Self {
        Self {
            search: search.into(),
            page,
        }
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "products[search='{}', page={}]", self.search, self.page)
    }
}
