//! Numeric cell parsing.

use std::sync::LazyLock;

use regex::Regex;

/// Plain decimal with optional sign, fraction and exponent.
/// Accepts: `5`, `+5`, `-2.5`, `.5`, `5.`, `1e3`
static DECIMAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("Invalid decimal regex")
});

/// Remove every literal `%` from a cell text.
pub fn strip_percent(text: &str) -> String {
    text.replace('%', "")
}

/// Parse a cell text as a number.
///
/// Surrounding whitespace is ignored. Empty text, thousands separators and
/// values that overflow to infinity are not numeric.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if !DECIMAL_REGEX.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_numeric("5"), Some(5.0));
        assert_eq!(parse_numeric("+5"), Some(5.0));
        assert_eq!(parse_numeric("-2.5"), Some(-2.5));
        assert_eq!(parse_numeric(".5"), Some(0.5));
        assert_eq!(parse_numeric("5."), Some(5.0));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric("  42  "), Some(42.0));
    }

    #[test]
    fn rejects_non_decimals() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("   "), None);
        assert_eq!(parse_numeric("1,000"), None);
        assert_eq!(parse_numeric("0x10"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("12 ISK"), None);
        assert_eq!(parse_numeric("."), None);
        assert_eq!(parse_numeric("1e999"), None);
    }

    #[test]
    fn percent_is_stripped_before_parsing() {
        assert_eq!(strip_percent("+5%"), "+5");
        assert_eq!(strip_percent("%1%0%"), "10");
        assert_eq!(parse_numeric(&strip_percent("12.5%")), Some(12.5));
    }
}
