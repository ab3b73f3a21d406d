// web_app/api/query.rs - Reactive binding between a key signal and the cache
//
// Whenever the key changes the hook publishes whatever the cache already
// holds for it, then starts a fetch if the entry is missing or stale.
// Results that land after the key has moved on are cached but not
// published.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::cache::{QueryCache, QuerySnapshot};
use crate::web_app::api::client::ProductApi;
use crate::web_app::api::runtime::BrowserRuntime;
use crate::web_app::model::{Product, QueryKey};

/// The cache type the app provides through context
pub type ProductCache = QueryCache<ProductApi, BrowserRuntime>;

/// Page data tagged with the key it was fetched for
pub type DeliveredPage = (QueryKey, Arc<Vec<Product>>);

#[derive(Clone, Copy)]
pub struct ProductQuery {
    /// Most recent page delivered. Holds the previous key's data until the
    /// new key has something to show.
    pub page: ReadSignal<Option<DeliveredPage>>,
    pub is_loading: Signal<bool>,
    pub is_error: Signal<bool>,
}

pub fn use_product_query(cache: Arc<ProductCache>, key: Signal<QueryKey>) -> ProductQuery {
    let (page, set_page) = signal(None::<DeliveredPage>);
    let (is_loading, set_loading) = signal(false);
    let (is_error, set_error) = signal(false);

    let publish = move |key: &QueryKey, snapshot: &QuerySnapshot| {
        set_loading.set(snapshot.is_loading());
        set_error.set(snapshot.is_error);
        if let Some(data) = &snapshot.data {
            set_page.set(Some((key.clone(), Arc::clone(data))));
        }
    };

    Effect::new(move || {
        let current = key.get();
        let snapshot = cache.snapshot(&current);
        publish(&current, &snapshot);

        if !cache.needs_fetch(&current) {
            return;
        }
        if snapshot.data.is_none() {
            set_loading.set(true);
        }
        set_error.set(false);

        let cache = Arc::clone(&cache);
        spawn_local(async move {
            let snapshot = cache.fetch(&current).await;
            if key.with_untracked(|latest| *latest == current) {
                publish(&current, &snapshot);
            } else {
                tracing::debug!("Not publishing {}: key changed while fetching", current);
            }
        });
    });

    ProductQuery {
        page,
        is_loading: is_loading.into(),
        is_error: is_error.into(),
    }
}
