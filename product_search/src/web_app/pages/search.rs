// web_app/pages/search.rs - Search page component
//
// Owns the query text, the current page and the accumulated results.
// The debounced text plus the page form the cache key; every page the
// query hook delivers is folded into the accumulated list, which feeds
// the SearchInput dropdown. Selected products render as cards below.

use std::sync::Arc;

use leptos::prelude::*;

use crate::web_app::api::query::{use_product_query, ProductCache};
use crate::web_app::api::runtime::BrowserRuntime;
use crate::web_app::api::{CachePolicy, ProductApi};
use crate::web_app::components::{ProductCard, SearchInput};
use crate::web_app::config::SearchConfig;
use crate::web_app::hooks::use_debounced;
use crate::web_app::model::Product;
use crate::web_app::state::{AccumulatedResults, QueryState};

/// Main search page
#[component]
pub fn SearchPage() -> impl IntoView {
    let config = use_context::<SearchConfig>().unwrap_or_default();
    let cache = use_context::<Arc<ProductCache>>().unwrap_or_else(|| {
        tracing::warn!("No shared product cache in context, creating a page-local one");
        Arc::new(ProductCache::new(
            ProductApi::from_config(&config),
            BrowserRuntime,
            CachePolicy::from(&config),
        ))
    });

    let query_state = RwSignal::new(QueryState::default());
    let results = RwSignal::new(AccumulatedResults::default());
    let selected = RwSignal::new(Vec::<Product>::new());

    let query_text = Signal::derive(move || query_state.with(|state| state.text().to_string()));
    let debounced = use_debounced(query_text, config.debounce_ms);
    let key = Memo::new(move |_| {
        let search = debounced.get();
        query_state.with(|state| state.key_for(&search))
    });

    let query = use_product_query(cache, key.into());

    // Fold each delivered page into the list shown by the dropdown
    Effect::new(move || {
        if let Some((key, products)) = query.page.get() {
            let appended = results
                .try_update(|results| results.absorb(&key, &products))
                .unwrap_or(0);
            tracing::debug!("{} delivered {} products, {} new", key, products.len(), appended);
        }
    });

    let data = Signal::derive(move || results.with(|results| results.items().to_vec()));

    let set_query = Callback::new(move |text: String| {
        query_state.update(|state| state.set_text(text));
    });

    let load_more = Callback::new(move |()| {
        let is_loading = query.is_loading.get_untracked();
        if !results.with_untracked(|results| results.can_load_more(is_loading)) {
            tracing::debug!("Ignoring load more (loading: {})", is_loading);
            return;
        }
        query_state.update(QueryState::next_page);
    });

    let on_select = Callback::new(move |items: Vec<Product>| {
        tracing::info!("{} product(s) selected", items.len());
        selected.set(items);
    });

    let render_item = Callback::new(|product: Product| {
        view! { <span class="text-gray-800">{product.title}</span> }.into_any()
    });

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            // Header
            <header class="bg-white shadow-sm border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center gap-2">
                    <span class="text-2xl">"🔍"</span>
                    <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-indigo-600">
                        "Product Search"
                    </h1>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <section class="flex justify-center mb-10">
                    <SearchInput
                        placeholder=config.placeholder.clone()
                        query=query_text
                        set_query=set_query
                        data=data
                        is_loading=query.is_loading
                        is_error=query.is_error
                        on_select=on_select
                        allow_multiple=config.allow_multiple
                        render_item=render_item
                        load_more=load_more
                        debounce_ms=config.debounce_ms
                    />
                </section>

                // Selected products
                <section class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=move || selected.get()
                        key=|product| product.id
                        children=move |product: Product| view! { <ProductCard product=product /> }
                    />
                </section>
            </main>
        </div>
    }
}
