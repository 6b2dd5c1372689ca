//! Featured and best-seller shelves, backed by configured collection
//! handles on the upstream storefront.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use vitrine_core::ProductSummary;

use crate::middleware::RequestId;

use super::{map_catalog_error, normalize_limit, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct ShelfQuery {
    pub limit: Option<u32>,
}

pub(super) async fn featured_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ShelfQuery>,
) -> Result<Json<ApiResponse<Vec<ProductSummary>>>, ApiError> {
    shelf(&state, req_id, &state.featured_collection, query.limit).await
}

pub(super) async fn best_sellers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ShelfQuery>,
) -> Result<Json<ApiResponse<Vec<ProductSummary>>>, ApiError> {
    shelf(&state, req_id, &state.best_sellers_collection, query.limit).await
}

async fn shelf(
    state: &AppState,
    req_id: RequestId,
    collection: &str,
    limit: Option<u32>,
) -> Result<Json<ApiResponse<Vec<ProductSummary>>>, ApiError> {
    let data = state
        .catalog
        .collection_products(collection, normalize_limit(limit))
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
