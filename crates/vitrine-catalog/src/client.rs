//! HTTP client for the upstream Storefront GraphQL API.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::json;
use vitrine_core::{AppConfig, Product, ProductSummary};

use crate::error::CatalogError;
use crate::normalize::{normalize_product, normalize_summary};
use crate::queries;
use crate::retry::retry_with_backoff;
use crate::types::{CollectionData, GraphQlResponse, ProductData, SearchData, ShopData};

/// Connection settings for [`StorefrontClient`].
///
/// Use [`StorefrontConfig::from_app_config`] in production; tests build
/// one directly with `base_url` pointed at a mock server.
#[derive(Clone)]
pub struct StorefrontConfig {
    /// Storefront origin, e.g. `"https://demo-shop.myshopify.com"`.
    /// A bare domain is accepted and treated as https.
    pub base_url: String,
    pub access_token: String,
    /// GraphQL API version segment, e.g. `"2024-10"`.
    pub api_version: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Upper bound on items requested per query; the upstream caps
    /// connection pages at 250.
    pub fetch_window: u32,
    /// Additional attempts after the first failure for transient errors.
    pub max_retries: u32,
    /// Base delay in seconds for exponential backoff: `base * 2^attempt`.
    pub backoff_base_secs: u64,
}

impl StorefrontConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.shop_domain.clone(),
            access_token: config.storefront_token.clone(),
            api_version: config.api_version.clone(),
            timeout_secs: config.catalog_request_timeout_secs,
            user_agent: config.catalog_user_agent.clone(),
            fetch_window: config.fetch_window,
            max_retries: config.catalog_max_retries,
            backoff_base_secs: config.catalog_retry_backoff_base_secs,
        }
    }
}

impl std::fmt::Debug for StorefrontConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"[redacted]")
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("fetch_window", &self.fetch_window)
            .field("max_retries", &self.max_retries)
            .field("backoff_base_secs", &self.backoff_base_secs)
            .finish()
    }
}

/// Client for the Storefront GraphQL API.
///
/// All queries go through a single POST endpoint
/// (`{origin}/api/{version}/graphql.json`) authenticated with the
/// storefront access token header. Rate limiting (429), missing handles
/// (null lookups), GraphQL `errors` entries, and other non-2xx responses
/// surface as typed [`CatalogError`] variants. Transient errors (429,
/// network failures) are retried with exponential backoff.
pub struct StorefrontClient {
    client: Client,
    endpoint: Url,
    access_token: String,
    fetch_window: u32,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl StorefrontClient {
    /// Creates a client with configured timeout, `User-Agent`, and retry
    /// policy.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidDomain`] if `base_url` + `api_version` do
    ///   not form a valid endpoint URL.
    /// - [`CatalogError::Http`] if the underlying `reqwest::Client` cannot
    ///   be constructed.
    pub fn new(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;

        let endpoint = graphql_endpoint(&config.base_url, &config.api_version)?;

        Ok(Self {
            client,
            endpoint,
            access_token: config.access_token.clone(),
            fetch_window: config.fetch_window,
            max_retries: config.max_retries,
            backoff_base_secs: config.backoff_base_secs,
        })
    }

    /// Fetches one product with its options and a single bounded page of
    /// variants (at most `fetch_window`, hard-capped upstream at 250).
    ///
    /// # Errors
    ///
    /// - [`CatalogError::ProductNotFound`] — the upstream returned a null
    ///   product for this handle.
    /// - Any transport/envelope error from the query itself.
    pub async fn product_by_handle(&self, handle: &str) -> Result<Product, CatalogError> {
        let variables = json!({ "handle": handle, "first": self.fetch_window });
        let data: ProductData = self
            .execute(
                queries::PRODUCT_BY_HANDLE,
                variables,
                &format!("product \"{handle}\""),
            )
            .await?;

        let raw = data.product.ok_or_else(|| CatalogError::ProductNotFound {
            handle: handle.to_owned(),
        })?;
        Ok(normalize_product(raw))
    }

    /// Searches products by free-text query, returning at most
    /// `first.clamp(1, fetch_window)` summaries.
    ///
    /// # Errors
    ///
    /// Any transport/envelope error from the query.
    pub async fn search_products(
        &self,
        query: &str,
        first: u32,
    ) -> Result<Vec<ProductSummary>, CatalogError> {
        let first = first.clamp(1, self.fetch_window);
        let variables = json!({ "query": query, "first": first });
        let data: SearchData = self
            .execute(queries::SEARCH_PRODUCTS, variables, "product search")
            .await?;

        Ok(data
            .products
            .edges
            .into_iter()
            .map(|edge| normalize_summary(edge.node))
            .collect())
    }

    /// Fetches the products of one collection (featured / best-seller
    /// shelves), at most `first.clamp(1, fetch_window)` summaries.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::CollectionNotFound`] — the upstream returned a
    ///   null collection for this handle.
    /// - Any transport/envelope error from the query itself.
    pub async fn collection_products(
        &self,
        handle: &str,
        first: u32,
    ) -> Result<Vec<ProductSummary>, CatalogError> {
        let first = first.clamp(1, self.fetch_window);
        let variables = json!({ "handle": handle, "first": first });
        let data: CollectionData = self
            .execute(
                queries::COLLECTION_PRODUCTS,
                variables,
                &format!("collection \"{handle}\""),
            )
            .await?;

        let collection = data
            .collection
            .ok_or_else(|| CatalogError::CollectionNotFound {
                handle: handle.to_owned(),
            })?;
        Ok(collection
            .products
            .edges
            .into_iter()
            .map(|edge| normalize_summary(edge.node))
            .collect())
    }

    /// Cheapest upstream round trip; used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Any transport/envelope error from the query.
    pub async fn shop_name(&self) -> Result<String, CatalogError> {
        let data: ShopData = self
            .execute(queries::SHOP_PROBE, json!({}), "shop probe")
            .await?;
        Ok(data.shop.name)
    }

    /// Runs one GraphQL document with retry, returning the envelope's
    /// `data` payload.
    async fn execute<T>(
        &self,
        query: &'static str,
        variables: serde_json::Value,
        context: &str,
    ) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
    {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let body = json!({ "query": query, "variables": variables.clone() });
            async move {
                let response = self
                    .client
                    .post(self.endpoint.clone())
                    .header("X-Shopify-Storefront-Access-Token", &self.access_token)
                    .json(&body)
                    .send()
                    .await?;

                let status = response.status();

                if status == StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(2);

                    return Err(CatalogError::RateLimited {
                        domain: self.domain(),
                        retry_after_secs,
                    });
                }

                if !status.is_success() {
                    return Err(CatalogError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: self.endpoint.to_string(),
                    });
                }

                let body_text = response.text().await?;
                let envelope: GraphQlResponse<T> =
                    serde_json::from_str(&body_text).map_err(|e| CatalogError::Deserialize {
                        context: context.to_owned(),
                        source: e,
                    })?;

                if let Some(error) = envelope.errors.first() {
                    return Err(CatalogError::GraphQl {
                        context: context.to_owned(),
                        message: error.message.clone(),
                    });
                }

                envelope.data.ok_or_else(|| CatalogError::GraphQl {
                    context: context.to_owned(),
                    message: "response envelope carried no data".to_owned(),
                })
            }
        })
        .await
    }

    fn domain(&self) -> String {
        self.endpoint
            .host_str()
            .unwrap_or("storefront")
            .to_owned()
    }
}

/// Builds the GraphQL endpoint URL from the configured origin and API
/// version. A bare domain gets an https scheme; trailing slashes are
/// stripped so the path always lands at `/api/{version}/graphql.json`.
fn graphql_endpoint(base_url: &str, api_version: &str) -> Result<Url, CatalogError> {
    let origin = if base_url.starts_with("http://") || base_url.starts_with("https://") {
        base_url.trim_end_matches('/').to_owned()
    } else {
        format!("https://{}", base_url.trim_end_matches('/'))
    };

    let raw = format!("{origin}/api/{api_version}/graphql.json");
    Url::parse(&raw).map_err(|e| CatalogError::InvalidDomain {
        domain: base_url.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
