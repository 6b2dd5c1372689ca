use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use vitrine_core::{aggregate, classify, resolve, sort_colors, sort_sizes, Product, Variant};

use crate::middleware::RequestId;

use super::{map_catalog_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct OptionsQuery {
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct VariantQuery {
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Option discovery payload: the recognized keys plus the currently
/// purchasable values, sorted for presentation.
#[derive(Debug, Serialize)]
pub(super) struct ProductOptionsData {
    color_key: Option<String>,
    size_key: Option<String>,
    colors: Vec<String>,
    sizes: Vec<String>,
}

pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(handle): Path<String>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let product = state
        .catalog
        .product_by_handle(&handle)
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: product,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// `GET /api/v1/products/{handle}/options?color=`
///
/// Classifies the product's options, aggregates the in-stock values
/// (conditioned on `color` when given), and sorts them for display.
pub(super) async fn get_product_options(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(handle): Path<String>,
    Query(query): Query<OptionsQuery>,
) -> Result<Json<ApiResponse<ProductOptionsData>>, ApiError> {
    let product = state
        .catalog
        .product_by_handle(&handle)
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    let keys = classify(&product.options);
    let mut availability = aggregate(&product.variants, keys, query.color.as_deref());
    sort_colors(&mut availability.colors);
    sort_sizes(&mut availability.sizes);

    let data = ProductOptionsData {
        color_key: keys.color.map(ToOwned::to_owned),
        size_key: keys.size.map(ToOwned::to_owned),
        colors: availability.colors,
        sizes: availability.sizes,
    };

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// `GET /api/v1/products/{handle}/variant?size=&color=`
///
/// Resolves the requested combination to a single variant. The result may
/// be out of stock — clients read `available_for_sale` on it; a missing
/// combination is a `variant_not_found`, distinct from an unknown handle.
pub(super) async fn get_product_variant(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(handle): Path<String>,
    Query(query): Query<VariantQuery>,
) -> Result<Json<ApiResponse<Variant>>, ApiError> {
    let product = state
        .catalog
        .product_by_handle(&handle)
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    let keys = classify(&product.options);
    match resolve(
        &product.variants,
        keys,
        query.size.as_deref(),
        query.color.as_deref(),
    ) {
        Some(variant) => Ok(Json(ApiResponse {
            data: variant.clone(),
            meta: ResponseMeta::new(req_id.0),
        })),
        None => Err(ApiError::new(
            req_id.0,
            "variant_not_found",
            "no variant matches the requested size/color",
        )),
    }
}
