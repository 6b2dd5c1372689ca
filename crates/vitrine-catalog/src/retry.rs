//! Retry with exponential backoff for transient upstream failures.
//!
//! Only conditions that can heal on their own are retried: 429 responses
//! and network-level failures. Everything else (not-found, GraphQL errors,
//! parse failures) propagates immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::CatalogError;

/// Returns `true` if `err` represents a transient condition worth retrying.
fn is_retriable(err: &CatalogError) -> bool {
    matches!(
        err,
        CatalogError::RateLimited { .. } | CatalogError::Http(_)
    )
}

/// Executes `operation`, sleeping `backoff_base_secs * 2^attempt` seconds
/// between attempts, up to `max_retries` additional attempts after the
/// first. With `max_retries = 1` the operation runs at most twice.
///
/// Non-retriable errors are returned immediately; after the final attempt
/// the last error is returned as-is.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, CatalogError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CatalogError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                err
            }
        };

        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient catalog error — retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
