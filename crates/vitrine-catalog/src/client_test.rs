use super::*;

fn test_config(base_url: &str) -> StorefrontConfig {
    StorefrontConfig {
        base_url: base_url.to_owned(),
        access_token: "test-token".to_owned(),
        api_version: "2024-10".to_owned(),
        timeout_secs: 5,
        user_agent: "vitrine-test/0.1".to_owned(),
        fetch_window: 250,
        max_retries: 0,
        backoff_base_secs: 0,
    }
}

#[test]
fn graphql_endpoint_from_bare_domain() {
    let url = graphql_endpoint("demo-shop.myshopify.com", "2024-10").unwrap();
    assert_eq!(
        url.as_str(),
        "https://demo-shop.myshopify.com/api/2024-10/graphql.json"
    );
}

#[test]
fn graphql_endpoint_keeps_explicit_scheme() {
    let url = graphql_endpoint("http://127.0.0.1:9999", "2024-10").unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:9999/api/2024-10/graphql.json");
}

#[test]
fn graphql_endpoint_strips_trailing_slash() {
    let url = graphql_endpoint("https://demo-shop.myshopify.com/", "2024-10").unwrap();
    assert_eq!(
        url.as_str(),
        "https://demo-shop.myshopify.com/api/2024-10/graphql.json"
    );
}

#[test]
fn graphql_endpoint_rejects_unparseable_domain() {
    let err = graphql_endpoint("not a domain", "2024-10").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidDomain { .. }));
}

#[test]
fn client_builds_from_valid_config() {
    let client = StorefrontClient::new(&test_config("demo-shop.myshopify.com"));
    assert!(client.is_ok());
}

#[test]
fn config_debug_redacts_access_token() {
    let rendered = format!("{:?}", test_config("demo-shop.myshopify.com"));
    assert!(!rendered.contains("test-token"), "token leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
