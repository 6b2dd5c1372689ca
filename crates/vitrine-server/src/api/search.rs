use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use vitrine_core::ProductSummary;

use crate::middleware::RequestId;

use super::{map_catalog_error, normalize_limit, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<u32>,
}

pub(super) async fn search_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<ProductSummary>>>, ApiError> {
    let q = query.q.as_deref().map(str::trim).unwrap_or("");
    if q.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "query parameter \"q\" is required",
        ));
    }

    let data = state
        .catalog
        .search_products(q, normalize_limit(query.limit))
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
