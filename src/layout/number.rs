//! Numeric display policy.
//!
//! Currency and quantity figures print as integers truncated toward zero,
//! never rounded: `5.5` prints `5`, `-0.9` prints `0`. Input that does not
//! parse is the caller's to print verbatim.

/// Parse a decimal number, ignoring surrounding whitespace.
///
/// Accepts signs, fractions and exponents (`"-3"`, `".5"`, `"1e3"`).
/// Infinities and NaN are rejected because they have no integer form.
pub fn parse(value: &str) -> Option<f64> {
    let parsed: f64 = value.trim().parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

/// Render the integer part of `value`.
///
/// ```
/// use comanda::layout::number::integer_part;
///
/// assert_eq!(integer_part(12.9), "12");
/// assert_eq!(integer_part(-7.99), "-7");
/// assert_eq!(integer_part(-0.4), "0");
/// ```
pub fn integer_part(value: f64) -> String {
    let truncated = value.trunc();
    if truncated == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    format!("{:.0}", truncated)
}

/// Parse `value` and render its integer part, or `None` if it is not a number.
pub fn truncated(value: &str) -> Option<String> {
    parse(value).map(integer_part)
}

/// Whether `value` is an unsigned plain decimal: ASCII digits with at most one
/// `.` and at least one digit. Table cells are only coerced when this holds,
/// so codes like `"-"`, `"1e3"` or `"A1"` pass through untouched.
pub fn is_plain_decimal(value: &str) -> bool {
    let mut digits = 0;
    let mut dots = 0;
    for c in value.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(parse("5.5"), Some(5.5));
        assert_eq!(parse(" 12 "), Some(12.0));
        assert_eq!(parse("-3"), Some(-3.0));
        assert_eq!(parse("1e3"), Some(1000.0));
        assert_eq!(parse("abc"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("inf"), None);
        assert_eq!(parse("NaN"), None);
    }

    #[test]
    fn test_truncation_not_rounding() {
        assert_eq!(truncated("9.99").as_deref(), Some("9"));
        assert_eq!(truncated("-9.99").as_deref(), Some("-9"));
        assert_eq!(truncated("0.5").as_deref(), Some("0"));
        assert_eq!(truncated("100").as_deref(), Some("100"));
        assert_eq!(truncated("n/a"), None);
    }

    #[test]
    fn test_large_values_keep_all_digits() {
        assert_eq!(integer_part(1e20), "100000000000000000000");
    }

    #[test]
    fn test_plain_decimal() {
        assert!(is_plain_decimal("12"));
        assert!(is_plain_decimal("12.9"));
        assert!(is_plain_decimal("12."));
        assert!(is_plain_decimal(".5"));
        assert!(!is_plain_decimal("."));
        assert!(!is_plain_decimal(""));
        assert!(!is_plain_decimal("1.2.3"));
        assert!(!is_plain_decimal("-5"));
        assert!(!is_plain_decimal("1e3"));
        assert!(!is_plain_decimal(" 5"));
    }
}
