// web_app/state/results.rs - Query state and page accumulation
//
// The page owns one QueryState (text + page) and one AccumulatedResults.
// Pages are appended in the order their responses arrive. A page that
// was already absorbed for the current text is ignored, as are products
// whose id is already in the list, so a refetch of stale data or an early
// second load-more never duplicates rows. The list is reset whenever the
// search text changes.

use crate::web_app::model::{Product, QueryKey};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    text: String,
    page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            text: String::new(),
            page: 1,
        }
    }
}

impl QueryState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// New input text always restarts at page 1
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.page = 1;
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Cache key for this page under a (debounced) search text
    pub fn key_for(&self, search: &str) -> QueryKey {
        QueryKey::new(search, self.page)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccumulatedResults {
    search: String,
    items: Vec<Product>,
    pages: Vec<u32>,
    exhausted: bool,
}

impl AccumulatedResults {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Pages absorbed so far, in arrival order
    pub fn pages(&self) -> &[u32] {
        &self.pages
    }

    /// True once a page came back empty for the current text
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn reset(&mut self, search: &str) {
        self.search = search.to_string();
        self.items.clear();
        self.pages.clear();
        self.exhausted = false;
    }

    /// Fold one fetched page in. Returns how many products were appended.
    pub fn absorb(&mut self, key: &QueryKey, page: &[Product]) -> usize {
        if key.search != self.search {
            self.reset(&key.search);
        }
        if self.pages.contains(&key.page) {
            return 0;
        }
        self.pages.push(key.page);

        if page.is_empty() {
            self.exhausted = true;
            return 0;
        }

        let before = self.items.len();
        for product in page {
            if !self.items.iter().any(|existing| existing.id == product.id) {
                self.items.push(product.clone());
            }
        }
        self.items.len() - before
    }

    /// Whether a load-more request should advance the page. Never while a
    /// page is in flight, and never once the results ran out.
    pub fn can_load_more(&self, is_loading: bool) -> bool {
        !is_loading && !self.exhausted
    }
}
