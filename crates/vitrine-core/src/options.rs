//! Classification of merchant-declared option names into semantic roles.
//!
//! Merchants name their options freely: apparel stores declare `"Size"`,
//! denim stores declare `"Waist"` and `"Length"`, some declare `"Shade"`
//! instead of `"Color"`. The classifier maps those names onto the two
//! roles the API exposes — color and size — using a fixed vocabulary.

use crate::product::OptionDef;
use crate::text::fold;

/// Option names recognized as the color role.
const COLOR_NAMES: [&str; 3] = ["color", "colour", "shade"];

/// Option names recognized as the size role, highest priority first.
///
/// When a product declares more than one size-like option (`Waist` and
/// `Length` on the same pair of jeans), the earliest entry here wins
/// regardless of declaration order: the option that denotes overall size
/// outranks a secondary dimension like inseam.
const SIZE_NAMES: [&str; 7] = ["size", "waist", "width", "w", "length", "inseam", "l"];

/// Semantic option keys derived from a product's declared options.
///
/// Keys borrow the declared names; recomputed per request, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionKeys<'a> {
    /// Declared name of the color option, if one was recognized.
    pub color: Option<&'a str>,
    /// Declared name of the primary size option, if one was recognized.
    pub size: Option<&'a str>,
}

/// Returns `true` when the option name folds to a recognized color name.
#[must_use]
pub fn is_color_like(name: &str) -> bool {
    COLOR_NAMES.contains(&fold(name).as_str())
}

/// Returns `true` when the option name folds to a recognized size name.
#[must_use]
pub fn is_size_like(name: &str) -> bool {
    SIZE_NAMES.contains(&fold(name).as_str())
}

/// Classifies a product's declared options into color and size keys.
///
/// The color key is the first color-like option in declared order; only
/// one is ever recognized. The size key is chosen by the fixed priority
/// in [`SIZE_NAMES`], independent of declaration order. Products with no
/// classifiable options get `None`/`None` — never an error.
#[must_use]
pub fn classify(options: &[OptionDef]) -> OptionKeys<'_> {
    OptionKeys {
        color: options
            .iter()
            .map(|o| o.name.as_str())
            .find(|name| is_color_like(name)),
        size: classify_size(options),
    }
}

fn classify_size(options: &[OptionDef]) -> Option<&str> {
    let size_like: Vec<&str> = options
        .iter()
        .map(|o| o.name.as_str())
        .filter(|name| is_size_like(name))
        .collect();

    for token in SIZE_NAMES {
        if let Some(name) = size_like.iter().copied().find(|name| fold(name) == token) {
            return Some(name);
        }
    }

    // Unreachable while SIZE_NAMES doubles as the size-like test, but an
    // edit to the vocabulary must not silently drop the key.
    size_like.first().copied()
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
