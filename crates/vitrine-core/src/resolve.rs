//! Resolution of a requested (size, color) pair to a single variant.

use crate::options::OptionKeys;
use crate::product::Variant;
use crate::text::fold;

/// Finds the first variant, in catalog-declared order, matching the
/// requested size and/or color.
///
/// Matching is case- and whitespace-insensitive. An omitted or empty
/// requested value matches every variant on that axis, so calling with
/// neither returns the first declared variant. A variant's value for a
/// missing key (or a dropped `selected_options` entry) is treated as the
/// empty string, which an empty requested value does match.
///
/// Availability is deliberately NOT filtered here: shoppers may look up
/// the price of an out-of-stock combination, so the caller reads
/// `available_for_sale` on the result. Discovery ([`crate::aggregate`])
/// is where sold-out combinations are hidden.
#[must_use]
pub fn resolve<'a>(
    variants: &'a [Variant],
    keys: OptionKeys<'_>,
    requested_size: Option<&str>,
    requested_color: Option<&str>,
) -> Option<&'a Variant> {
    let want_size = fold(requested_size.unwrap_or(""));
    let want_color = fold(requested_color.unwrap_or(""));

    variants.iter().find(|variant| {
        let v_size = keys
            .size
            .and_then(|key| variant.option_value(key))
            .unwrap_or("");
        let v_color = keys
            .color
            .and_then(|key| variant.option_value(key))
            .unwrap_or("");

        (want_size.is_empty() || fold(v_size) == want_size)
            && (want_color.is_empty() || fold(v_color) == want_color)
    })
}
