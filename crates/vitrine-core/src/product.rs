//! Domain types for the storefront catalog.
//!
//! These are the normalized shapes the rest of the workspace works with.
//! The catalog crate converts raw upstream GraphQL responses into these
//! types; the server serializes them back out. Option and value strings
//! are kept byte-for-byte as the catalog declared them — comparison-time
//! normalization lives in [`crate::text`] and never leaks into storage.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A merchant-declared configurable dimension of a product,
/// e.g. `"Color"` or `"Waist"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDef {
    /// Name exactly as declared by the merchant. Unique within one product,
    /// case-sensitive.
    pub name: String,
    /// Declared possible values. Informational only — availability is
    /// always derived from variants, never from this list.
    pub values: Vec<String>,
}

/// A price amount with its ISO 4217 currency code.
///
/// The amount stays a decimal string exactly as the upstream returns it,
/// e.g. `"79.00"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Money {
    pub amount: String,
    pub currency_code: String,
}

/// One concrete purchasable combination of option values for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    /// Opaque upstream variant identifier.
    pub id: String,
    /// Display title, e.g. `"Black / 32 / 34"`.
    pub title: String,
    pub available_for_sale: bool,
    /// One entry per product [`OptionDef`], keyed by the declared option
    /// name. Malformed upstream entries are dropped during normalization,
    /// so lookups for a declared key may legitimately miss.
    pub selected_options: HashMap<String, String>,
    /// Absent on endpoints that do not request pricing.
    pub price: Option<Money>,
}

impl Variant {
    /// Returns this variant's value for the given option name, if present.
    #[must_use]
    pub fn option_value(&self, name: &str) -> Option<&str> {
        self.selected_options.get(name).map(String::as_str)
    }
}

/// A product with its full option and variant detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    /// Stable, URL-safe catalog identifier. The external lookup key.
    pub handle: String,
    pub vendor: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Declared order is meaningful: the classifier falls back to it when
    /// no priority vocabulary entry matches.
    pub options: Vec<OptionDef>,
    /// Declared order is meaningful: the resolver returns the first match.
    pub variants: Vec<Variant>,
}

impl Product {
    /// Returns `true` if at least one variant is currently purchasable.
    #[must_use]
    pub fn has_available_variants(&self) -> bool {
        self.variants.iter().any(|v| v.available_for_sale)
    }
}

/// The narrow product shape returned by search and collection listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    pub title: String,
    pub handle: String,
    pub vendor: Option<String>,
    pub image_url: Option<String>,
    /// Lowest variant price, when the listing carries pricing.
    pub price: Option<Money>,
    pub available_for_sale: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(id: &str, available: bool) -> Variant {
        Variant {
            id: id.to_owned(),
            title: id.to_owned(),
            available_for_sale: available,
            selected_options: HashMap::new(),
            price: None,
        }
    }

    #[test]
    fn has_available_variants_true_when_any_in_stock() {
        let product = Product {
            title: "Classic Jeans".to_owned(),
            handle: "classic-jeans".to_owned(),
            vendor: None,
            description: None,
            image_url: None,
            options: vec![],
            variants: vec![variant("a", false), variant("b", true)],
        };
        assert!(product.has_available_variants());
    }

    #[test]
    fn has_available_variants_false_when_all_sold_out() {
        let product = Product {
            title: "Classic Jeans".to_owned(),
            handle: "classic-jeans".to_owned(),
            vendor: None,
            description: None,
            image_url: None,
            options: vec![],
            variants: vec![variant("a", false)],
        };
        assert!(!product.has_available_variants());
    }

    #[test]
    fn option_value_misses_for_undeclared_name() {
        let mut v = variant("a", true);
        v.selected_options
            .insert("Color".to_owned(), "Black".to_owned());
        assert_eq!(v.option_value("Color"), Some("Black"));
        assert!(v.option_value("Size").is_none());
    }

    #[test]
    fn product_summary_serializes_expected_fields() {
        let summary = ProductSummary {
            title: "Classic Jeans".to_owned(),
            handle: "classic-jeans".to_owned(),
            vendor: Some("Vitrine Denim".to_owned()),
            image_url: None,
            price: Some(Money {
                amount: "79.00".to_owned(),
                currency_code: "USD".to_owned(),
            }),
            available_for_sale: true,
        };
        let json = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(json["handle"], "classic-jeans");
        assert_eq!(json["price"]["amount"], "79.00");
        assert_eq!(json["available_for_sale"], true);
    }
}
