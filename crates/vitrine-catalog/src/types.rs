//! Raw Storefront GraphQL response shapes.
//!
//! ## Observed shape notes
//!
//! ### Envelope
//! Every response is `{"data": ..., "errors": [...]}`. On a failed query
//! `data` may be `null` or absent while `errors` carries at least one
//! entry; on success `errors` is absent. Both fields are modeled as
//! optional and checked by the client.
//!
//! ### Lookups by handle
//! `product(handle:)` and `collection(handle:)` return `null` — not an
//! error entry — when no such handle exists. Modeled as `Option` so the
//! client can surface a typed not-found.
//!
//! ### Connections
//! Variant and product lists arrive as `{"edges": [{"node": ...}]}`. Only
//! `node` is requested; cursors are never used (single bounded page).
//!
//! ### `selectedOptions`
//! A list of `{"name", "value"}` pairs, one per product option. Both
//! fields are modeled as `Option<String>` so a malformed entry can be
//! dropped during normalization instead of failing the whole product.
//!
//! ### `availableForSale`
//! Boolean on both variants and products. Defaults to `false` when absent:
//! discovery must never offer an out-of-stock combination as available.
//!
//! ### Prices
//! `{"amount": "79.0", "currencyCode": "USD"}` — the amount is a decimal
//! string and passes through untouched.

use serde::Deserialize;

/// The top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GraphQlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` for the product-by-handle query.
#[derive(Debug, Deserialize)]
pub struct ProductData {
    pub product: Option<RawProduct>,
}

/// `data` for the product search query.
#[derive(Debug, Deserialize)]
pub struct SearchData {
    pub products: Connection<RawProductSummary>,
}

/// `data` for the collection products query.
#[derive(Debug, Deserialize)]
pub struct CollectionData {
    pub collection: Option<RawCollection>,
}

#[derive(Debug, Deserialize)]
pub struct RawCollection {
    pub products: Connection<RawProductSummary>,
}

/// `data` for the shop probe used by the health endpoint.
#[derive(Debug, Deserialize)]
pub struct ShopData {
    pub shop: RawShop,
}

#[derive(Debug, Deserialize)]
pub struct RawShop {
    pub name: String,
}

/// A relay-style connection; only the nodes are requested.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub featured_image: Option<RawImage>,
    #[serde(default)]
    pub options: Vec<RawOption>,
    pub variants: Connection<RawVariant>,
}

#[derive(Debug, Deserialize)]
pub struct RawOption {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVariant {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub available_for_sale: bool,
    #[serde(default)]
    pub selected_options: Vec<RawSelectedOption>,
    #[serde(default)]
    pub price: Option<RawMoney>,
}

/// One `{name, value}` pair. Either side may be null on malformed data;
/// such entries are dropped in normalization, not treated as a fault.
#[derive(Debug, Deserialize)]
pub struct RawSelectedOption {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMoney {
    pub amount: String,
    pub currency_code: String,
}

#[derive(Debug, Deserialize)]
pub struct RawImage {
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProductSummary {
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub featured_image: Option<RawImage>,
    #[serde(default)]
    pub price_range: Option<RawPriceRange>,
    #[serde(default)]
    pub available_for_sale: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPriceRange {
    pub min_variant_price: RawMoney,
}
