//! Aggregation of in-stock color and size values across a product's variants.

use std::collections::HashSet;

use crate::options::OptionKeys;
use crate::product::Variant;
use crate::text::fold;

/// The set of option values currently purchasable for one product.
///
/// Values keep their declared case for display; duplicates are removed by
/// exact string. Ordering is left to [`crate::sort`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Availability {
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
}

/// Collects the in-stock colors and sizes for a product.
///
/// Only variants with `available_for_sale == true` contribute — a declared
/// option value with zero in-stock variants is invisible here, even though
/// it appears in the product's static `options.values`.
///
/// With a `color_filter`, only sizes co-occurring with an in-stock variant
/// of that color are returned; the filter is compared case- and
/// whitespace-insensitively. Without one (or when the product has no color
/// option at all) the size set is the union across all available variants,
/// and the caller is expected to re-query once a color is chosen.
#[must_use]
pub fn aggregate(
    variants: &[Variant],
    keys: OptionKeys<'_>,
    color_filter: Option<&str>,
) -> Availability {
    let filter = color_filter.map(fold);

    let mut colors: Vec<String> = Vec::new();
    let mut sizes: Vec<String> = Vec::new();
    let mut seen_colors: HashSet<&str> = HashSet::new();
    let mut seen_sizes: HashSet<&str> = HashSet::new();

    for variant in variants.iter().filter(|v| v.available_for_sale) {
        let v_color = keys.color.and_then(|key| variant.option_value(key));

        if let Some(color) = v_color {
            if seen_colors.insert(color) {
                colors.push(color.to_owned());
            }
        }

        let size_included = match (&filter, keys.color) {
            (None, _) | (_, None) => true,
            (Some(want), Some(_)) => v_color.is_some_and(|c| fold(c) == *want),
        };

        if size_included {
            if let Some(size) = keys.size.and_then(|key| variant.option_value(key)) {
                if seen_sizes.insert(size) {
                    sizes.push(size.to_owned());
                }
            }
        }
    }

    Availability { colors, sizes }
}
