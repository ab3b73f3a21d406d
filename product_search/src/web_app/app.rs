// web_app/app.rs - Root application component
//
// Sets up page meta, shared context (config and the product cache) and
// routing. Both "/" and "/search" show the search page.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::web_app::api::query::ProductCache;
use crate::web_app::api::runtime::BrowserRuntime;
use crate::web_app::api::{CachePolicy, ProductApi};
use crate::web_app::config::SearchConfig;
use crate::web_app::pages::SearchPage;

/// Root application component
///
/// One query cache is created here and shared through context, so
/// navigating between routes keeps fetched pages.
#[component]
pub fn App(
    /// Runtime configuration; defaults when omitted
    #[prop(optional)]
    config: Option<SearchConfig>,
) -> impl IntoView {
    provide_meta_context();

    let config = config.unwrap_or_default();
    let cache: Arc<ProductCache> = Arc::new(ProductCache::new(
        ProductApi::from_config(&config),
        BrowserRuntime,
        CachePolicy::from(&config),
    ));
    provide_context(config);
    provide_context(cache);

    view! {
        <Title text="Product Search" />
        <Meta name="description" content="Search products with autocomplete and infinite scroll" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=SearchPage />
                    <Route path=path!("/search") view=SearchPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Shown for any path other than "/" and "/search"
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();
    let message = move || not_found_message(&location.pathname.get());

    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="bg-white rounded-xl shadow-md border border-gray-100 p-8 text-center max-w-md">
                <p class="text-5xl mb-4">"🔍"</p>
                <h1 class="text-2xl font-bold text-gray-800 mb-2">"Nothing here"</h1>
                <p class="text-gray-500 mb-6 break-all">{message}</p>
                <a
                    href="/search"
                    class="inline-block px-5 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors"
                >
                    "Back to product search"
                </a>
            </div>
        </div>
    }
}

fn not_found_message(path: &str) -> String {
    match path.trim_matches('/') {
        "" => "This page does not exist.".to_string(),
        rest => format!("No page at /{}. Products are searched from the search page.", rest),
    }
}
