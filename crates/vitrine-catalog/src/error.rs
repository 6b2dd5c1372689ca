use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rate limited by {domain} (retry after {retry_after_secs}s)")]
    RateLimited {
        domain: String,
        retry_after_secs: u64,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("storefront API error for {context}: {message}")]
    GraphQl { context: String, message: String },

    #[error("no product with handle \"{handle}\"")]
    ProductNotFound { handle: String },

    #[error("no collection with handle \"{handle}\"")]
    CollectionNotFound { handle: String },

    #[error("invalid shop domain \"{domain}\": {reason}")]
    InvalidDomain { domain: String, reason: String },
}
