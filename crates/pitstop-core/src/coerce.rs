//! # Lenient Numeric Coercion
//!
//! The add/edit dialogs hand over raw strings, and the historical contract is
//! that malformed numbers become zero instead of failing the whole form. That
//! behavior is kept for compatibility but isolated here, so a caller that
//! wants strict rejection can parse first and skip these helpers entirely.

/// Parses a quantity field, falling back to 0 on malformed input.
///
/// Accepts surrounding whitespace and a trailing decimal part ("3.0" is 3);
/// anything unparseable, negative-garbage or empty becomes 0.
///
/// ## Example
/// ```rust
/// use pitstop_core::coerce::coerce_quantity;
///
/// assert_eq!(coerce_quantity(" 12 "), 12);
/// assert_eq!(coerce_quantity("12.0"), 12);
/// assert_eq!(coerce_quantity("a dozen"), 0);
/// assert_eq!(coerce_quantity(""), 0);
/// ```
pub fn coerce_quantity(input: &str) -> i64 {
    let input = input.trim();
    if let Ok(n) = input.parse::<i64>() {
        return n;
    }
    // Spreadsheet paste often produces "3.0" for integer columns.
    if let Ok(f) = input.parse::<f64>() {
        if f.is_finite() {
            return f.trunc() as i64;
        }
    }
    0
}

/// Parses a price field, falling back to 0.0 on malformed input.
///
/// ## Example
/// ```rust
/// use pitstop_core::coerce::coerce_price;
///
/// assert_eq!(coerce_price("49.99"), 49.99);
/// assert_eq!(coerce_price("free"), 0.0);
/// ```
pub fn coerce_price(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(f) if f.is_finite() => f,
        _ => 0.0,
    }
}

/// Returns the trimmed input, or the sentinel when it is blank.
pub fn or_sentinel(input: &str, sentinel: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        sentinel.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_quantity() {
        assert_eq!(coerce_quantity("10"), 10);
        assert_eq!(coerce_quantity("  10  "), 10);
        assert_eq!(coerce_quantity("-3"), -3);
        assert_eq!(coerce_quantity("10.9"), 10);
        assert_eq!(coerce_quantity("ten"), 0);
        assert_eq!(coerce_quantity(""), 0);
        assert_eq!(coerce_quantity("NaN"), 0);
        assert_eq!(coerce_quantity("inf"), 0);
    }

    #[test]
    fn test_coerce_price() {
        assert_eq!(coerce_price("49.99"), 49.99);
        assert_eq!(coerce_price(" 0.5 "), 0.5);
        assert_eq!(coerce_price("-1.25"), -1.25);
        assert_eq!(coerce_price("abc"), 0.0);
        assert_eq!(coerce_price(""), 0.0);
        assert_eq!(coerce_price("NaN"), 0.0);
    }

    #[test]
    fn test_or_sentinel() {
        assert_eq!(or_sentinel("Toyota", "-"), "Toyota");
        assert_eq!(or_sentinel("  Toyota  ", "-"), "Toyota");
        assert_eq!(or_sentinel("", "-"), "-");
        assert_eq!(or_sentinel("   ", "3"), "3");
    }
}
