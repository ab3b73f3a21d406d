// Client-side entry point
//
// Reads the optional inline JSON config from the host page, starts
// logging and mounts the app to <body>.

#[cfg(feature = "csr")]
fn main() {
    use leptos::prelude::*;
    use product_search::web_app::config::{SearchConfig, CONFIG_ELEMENT_ID};
    use product_search::web_app::logging::init_logging;
    use product_search::web_app::App;

    console_error_panic_hook::set_once();

    let inline = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    let (config, problem) = match inline.as_deref().map(SearchConfig::from_json_str) {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (SearchConfig::default(), Some(e)),
        None => (SearchConfig::default(), None),
    };

    init_logging(&config.log_filter);
    if let Some(e) = problem {
        tracing::warn!("Ignoring inline config: {}", e);
    }
    tracing::info!("Product search using {}", config.api_base_url);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("Build with --features csr (e.g. `trunk serve --features csr`)");
}
