//! Normalization from raw Storefront GraphQL shapes to the
//! [`vitrine_core`] domain types.
//!
//! Structural conversion only: connections are flattened, the
//! `selectedOptions` list becomes a name→value map, and malformed entries
//! are dropped rather than failing the product. Option and value strings
//! pass through byte-for-byte.

use std::collections::HashMap;

use vitrine_core::{Money, OptionDef, Product, ProductSummary, Variant};

use crate::types::{RawMoney, RawProduct, RawProductSummary, RawVariant};

/// Converts a raw product into the domain [`Product`].
#[must_use]
pub fn normalize_product(raw: RawProduct) -> Product {
    let options = raw
        .options
        .into_iter()
        .map(|o| OptionDef {
            name: o.name,
            values: o.values,
        })
        .collect();

    let variants = raw
        .variants
        .edges
        .into_iter()
        .map(|edge| normalize_variant(edge.node))
        .collect();

    Product {
        title: raw.title,
        handle: raw.handle,
        vendor: raw.vendor.filter(|v| !v.is_empty()),
        description: raw.description.filter(|d| !d.is_empty()),
        image_url: raw.featured_image.map(|image| image.url),
        options,
        variants,
    }
}

fn normalize_variant(raw: RawVariant) -> Variant {
    // Entries missing a name or value cannot be keyed; drop them and let
    // lookups treat the option as absent.
    let selected_options: HashMap<String, String> = raw
        .selected_options
        .into_iter()
        .filter_map(|entry| Some((entry.name?, entry.value?)))
        .collect();

    Variant {
        id: raw.id,
        title: raw.title,
        available_for_sale: raw.available_for_sale,
        selected_options,
        price: raw.price.map(normalize_money),
    }
}

/// Converts a raw listing entry into the domain [`ProductSummary`].
#[must_use]
pub fn normalize_summary(raw: RawProductSummary) -> ProductSummary {
    ProductSummary {
        title: raw.title,
        handle: raw.handle,
        vendor: raw.vendor.filter(|v| !v.is_empty()),
        image_url: raw.featured_image.map(|image| image.url),
        price: raw.price_range.map(|range| normalize_money(range.min_variant_price)),
        available_for_sale: raw.available_for_sale,
    }
}

fn normalize_money(raw: RawMoney) -> Money {
    Money {
        amount: raw.amount,
        currency_code: raw.currency_code,
    }
}
