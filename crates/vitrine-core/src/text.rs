//! Case/whitespace-insensitive string comparison primitive.
//!
//! Merchants declare option names and values with inconsistent casing and
//! stray whitespace (`"Color"`, `" colour "`, `"BLUE"`). Every comparison
//! in the engine goes through [`fold`]; declared strings are never altered
//! for display.

/// Returns the comparison form of a declared string: trimmed and lowercased.
#[must_use]
pub fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Returns `true` when `a` and `b` are equal after folding.
#[must_use]
pub fn eq_fold(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}
