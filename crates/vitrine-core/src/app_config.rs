use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Storefront domain the proxy fronts, e.g. `"demo-shop.myshopify.com"`.
    pub shop_domain: String,
    /// Public Storefront API access token. Server-side only; never echoed
    /// back to clients.
    pub storefront_token: String,
    /// Storefront GraphQL API version segment, e.g. `"2024-10"`.
    pub api_version: String,
    pub catalog_request_timeout_secs: u64,
    pub catalog_user_agent: String,
    pub catalog_max_retries: u32,
    pub catalog_retry_backoff_base_secs: u64,
    /// Upper bound on variants/products requested per upstream query.
    /// The Storefront API caps connection pages at 250.
    pub fetch_window: u32,
    /// Collection handle backing `/featured`.
    pub featured_collection: String,
    /// Collection handle backing `/best-sellers`.
    pub best_sellers_collection: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("shop_domain", &self.shop_domain)
            .field("storefront_token", &"[redacted]")
            .field("api_version", &self.api_version)
            .field(
                "catalog_request_timeout_secs",
                &self.catalog_request_timeout_secs,
            )
            .field("catalog_user_agent", &self.catalog_user_agent)
            .field("catalog_max_retries", &self.catalog_max_retries)
            .field(
                "catalog_retry_backoff_base_secs",
                &self.catalog_retry_backoff_base_secs,
            )
            .field("fetch_window", &self.fetch_window)
            .field("featured_collection", &self.featured_collection)
            .field("best_sellers_collection", &self.best_sellers_collection)
            .finish()
    }
}
