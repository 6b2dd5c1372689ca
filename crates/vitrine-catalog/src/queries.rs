//! GraphQL documents sent to the Storefront API.
//!
//! Each document is a single bounded query — no cursors, no fragments.
//! Variable names match the `serde_json::json!` objects built in
//! [`crate::client`].

/// Full product detail: options plus one page of variants.
pub const PRODUCT_BY_HANDLE: &str = "\
query ProductByHandle($handle: String!, $first: Int!) {
  product(handle: $handle) {
    title
    handle
    vendor
    description
    featuredImage { url }
    options { name values }
    variants(first: $first) {
      edges {
        node {
          id
          title
          availableForSale
          selectedOptions { name value }
          price { amount currencyCode }
        }
      }
    }
  }
}";

/// Product summaries matching a free-text query.
pub const SEARCH_PRODUCTS: &str = "\
query SearchProducts($query: String!, $first: Int!) {
  products(first: $first, query: $query) {
    edges {
      node {
        title
        handle
        vendor
        featuredImage { url }
        priceRange { minVariantPrice { amount currencyCode } }
        availableForSale
      }
    }
  }
}";

/// Product summaries for one collection (featured / best-seller shelves).
pub const COLLECTION_PRODUCTS: &str = "\
query CollectionProducts($handle: String!, $first: Int!) {
  collection(handle: $handle) {
    products(first: $first) {
      edges {
        node {
          title
          handle
          vendor
          featuredImage { url }
          priceRange { minVariantPrice { amount currencyCode } }
          availableForSale
        }
      }
    }
  }
}";

/// Cheapest possible round trip; used by the health endpoint.
pub const SHOP_PROBE: &str = "\
query ShopProbe {
  shop { name }
}";
