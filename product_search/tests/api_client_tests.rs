// tests/api_client_tests.rs - ProductApi against a local HTTP server

mod common;

use common::{ids, serve_once};
use product_search::web_app::api::ProductApi;
use product_search::web_app::error::SearchError;
use rust_decimal::Decimal;

#[tokio::test]
async fn test_fetch_returns_products() -> anyhow::Result<()> {
    let body = r#"{
        "status": "SUCCESS",
        "products": [
            {"id": 1, "title": "Red Shoe", "price": 19.5, "brand": "acme", "category": "shoes"},
            {"id": 2, "title": "Blue Hat"}
        ]
    }"#;
    let (base_url, server) = serve_once(200, body).await?;

    let api = ProductApi::new(base_url, 15);
    let products = api.fetch_products("", 1, 15).await?;

    assert_eq!(ids(&products), vec![1, 2]);
    assert_eq!(products[0].price, Some(Decimal::new(195, 1)));
    assert_eq!(products[0].brand.as_deref(), Some("acme"));
    assert_eq!(products[1].price, None);

    server.await??;
    Ok(())
}

#[tokio::test]
async fn test_fetch_sends_query_parameters() -> anyhow::Result<()> {
    let (base_url, server) = serve_once(200, r#"{"products": []}"#).await?;

    let api = ProductApi::new(base_url, 15);
    api.fetch_products("red hat", 3, 15).await?;

    let request_line = server.await??;
    assert!(request_line.starts_with("GET /api/products?"), "{}", request_line);
    assert!(request_line.contains("search=red+hat"), "{}", request_line);
    assert!(request_line.contains("page=3"), "{}", request_line);
    assert!(request_line.contains("limit=15"), "{}", request_line);
    Ok(())
}

#[tokio::test]
async fn test_missing_products_field_is_empty_page() -> anyhow::Result<()> {
    let (base_url, server) = serve_once(200, r#"{"status": "SUCCESS"}"#).await?;

    let products = ProductApi::new(base_url, 15).fetch_products("zzz", 1, 15).await?;
    assert!(products.is_empty());

    server.await??;
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_generic_failure() -> anyhow::Result<()> {
    let (base_url, server) = serve_once(500, r#"{"message": "boom"}"#).await?;

    let result = ProductApi::new(base_url, 15).fetch_products("", 1, 15).await;
    assert!(matches!(result, Err(SearchError::FetchFailed)));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Failed to fetch products"
    );

    server.await??;
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_generic_failure() -> anyhow::Result<()> {
    let (base_url, server) = serve_once(200, "not json").await?;

    let result = ProductApi::new(base_url, 15).fetch_products("", 1, 15).await;
    assert!(matches!(result, Err(SearchError::FetchFailed)));

    server.await??;
    Ok(())
}

#[tokio::test]
async fn test_unreachable_host_is_generic_failure() -> anyhow::Result<()> {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let api = ProductApi::new(format!("http://{}/api", addr), 15);
    let result = api.fetch_products("", 1, 15).await;
    assert!(matches!(result, Err(SearchError::FetchFailed)));
    Ok(())
}
