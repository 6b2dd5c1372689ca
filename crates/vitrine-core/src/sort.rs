//! Presentation ordering for color and size sets.

use std::cmp::Ordering;

/// Sorts color values in ascending lexical order.
pub fn sort_colors(colors: &mut [String]) {
    colors.sort();
}

/// Sorts size values numeric-first: values that parse entirely as a number
/// sort ascending by numeric value and precede all non-numeric values;
/// non-numeric values sort lexically among themselves.
///
/// Pants waists come out as `30, 32, 34`. Letter sizes come out
/// alphabetical — `L, M, S`, not garment order. That is legacy behavior
/// callers already depend on; do not "fix" it here.
pub fn sort_sizes(sizes: &mut [String]) {
    sizes.sort_by(|a, b| compare_sizes(a, b));
}

fn compare_sizes(a: &str, b: &str) -> Ordering {
    match (parse_numeric(a), parse_numeric(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// A value is numeric when the whole trimmed string parses as a finite
/// number — `"30"`, `"32.5"`, but not `"30W"` or `"M"`.
fn parse_numeric(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn sizes_sort_numerically_not_lexically() {
        let mut sizes = owned(&["34", "30", "32"]);
        sort_sizes(&mut sizes);
        assert_eq!(sizes, owned(&["30", "32", "34"]));
    }

    #[test]
    fn numeric_sort_is_by_value_not_digit_count() {
        let mut sizes = owned(&["100", "9", "30"]);
        sort_sizes(&mut sizes);
        assert_eq!(sizes, owned(&["9", "30", "100"]));
    }

    #[test]
    fn letter_sizes_sort_lexically() {
        let mut sizes = owned(&["M", "S", "L"]);
        sort_sizes(&mut sizes);
        assert_eq!(sizes, owned(&["L", "M", "S"]));
    }

    #[test]
    fn numeric_values_precede_non_numeric() {
        let mut sizes = owned(&["One Size", "32", "M", "30"]);
        sort_sizes(&mut sizes);
        assert_eq!(sizes, owned(&["30", "32", "M", "One Size"]));
    }

    #[test]
    fn fractional_sizes_are_numeric() {
        let mut sizes = owned(&["32.5", "32", "33"]);
        sort_sizes(&mut sizes);
        assert_eq!(sizes, owned(&["32", "32.5", "33"]));
    }

    #[test]
    fn mixed_token_like_30w_is_not_numeric() {
        let mut sizes = owned(&["30W", "28"]);
        sort_sizes(&mut sizes);
        assert_eq!(sizes, owned(&["28", "30W"]));
    }

    #[test]
    fn size_sort_is_idempotent() {
        let mut sizes = owned(&["30", "32", "M", "S"]);
        let before = sizes.clone();
        sort_sizes(&mut sizes);
        assert_eq!(sizes, before);
        sort_sizes(&mut sizes);
        assert_eq!(sizes, before);
    }

    #[test]
    fn colors_sort_lexically() {
        let mut colors = owned(&["Indigo", "Black", "Stone"]);
        sort_colors(&mut colors);
        assert_eq!(colors, owned(&["Black", "Indigo", "Stone"]));
    }

    #[test]
    fn color_sort_is_idempotent() {
        let mut colors = owned(&["Black", "Indigo"]);
        sort_colors(&mut colors);
        assert_eq!(colors, owned(&["Black", "Indigo"]));
        sort_colors(&mut colors);
        assert_eq!(colors, owned(&["Black", "Indigo"]));
    }
}
