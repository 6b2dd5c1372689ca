mod collections;
mod products;
mod search;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use vitrine_catalog::{CatalogError, StorefrontClient};

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<StorefrontClient>,
    /// Collection handle backing `/api/v1/featured`.
    pub featured_collection: String,
    /// Collection handle backing `/api/v1/best-sellers`.
    pub best_sellers_collection: String,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    catalog: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "product_not_found" | "variant_not_found" | "collection_not_found" => {
                StatusCode::NOT_FOUND
            }
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "upstream_rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            "bad_gateway" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Clamps a caller-supplied listing limit to a sane window.
pub(super) fn normalize_limit(limit: Option<u32>) -> u32 {
    limit.unwrap_or(24).clamp(1, 100)
}

/// Maps an upstream catalog failure onto the API error vocabulary.
///
/// Not-found lookups stay 404s; upstream throttling is surfaced as 429 so
/// clients back off; everything else is an opaque 502 — the upstream's
/// failure detail is logged here, not leaked to clients.
pub(super) fn map_catalog_error(request_id: String, error: &CatalogError) -> ApiError {
    match error {
        CatalogError::ProductNotFound { .. } => ApiError::new(
            request_id,
            "product_not_found",
            "no product with that handle",
        ),
        CatalogError::CollectionNotFound { .. } => ApiError::new(
            request_id,
            "collection_not_found",
            "no collection with that handle",
        ),
        CatalogError::RateLimited { .. } => {
            tracing::warn!(error = %error, "upstream catalog throttled the proxy");
            ApiError::new(
                request_id,
                "upstream_rate_limited",
                "the catalog is rate limiting requests; retry shortly",
            )
        }
        other => {
            tracing::error!(error = %other, "catalog query failed");
            ApiError::new(request_id, "bad_gateway", "upstream catalog query failed")
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

fn limited_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/search", get(search::search_products))
        .route("/api/v1/featured", get(collections::featured_products))
        .route("/api/v1/best-sellers", get(collections::best_sellers))
        .route("/api/v1/products/{handle}", get(products::get_product))
        .route(
            "/api/v1/products/{handle}/options",
            get(products::get_product_options),
        )
        .route(
            "/api/v1/products/{handle}/variant",
            get(products::get_product_variant),
        )
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new().route("/api/v1/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(limited_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);

    match state.catalog.shop_name().await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse {
                data: HealthData {
                    status: "ok",
                    catalog: "ok",
                },
                meta,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check: catalog unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    data: HealthData {
                        status: "degraded",
                        catalog: "unavailable",
                    },
                    meta,
                }),
            )
        }
    }
}

pub fn default_rate_limit_state() -> RateLimitState {
    RateLimitState::new(120, Duration::from_secs(60))
}
