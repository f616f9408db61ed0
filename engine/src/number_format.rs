//! FILENAME: engine/src/number_format.rs
//! PURPOSE: Number formatting utilities for the report surfaces.
//! CONTEXT: The report columns use fixed decimal places (3 for rates, 2 for
//! EIQ figures, 1 for the percentage change); this module handles those
//! conversions plus a general "trim trailing zeros" form for user input echo.

/// Format a number with the given number of decimal places.
pub fn format_decimal(value: f64, decimal_places: u8) -> String {
    format!("{:.prec$}", value, prec = decimal_places as usize)
}

/// Format a number with fixed decimals and thousands separators.
pub fn format_decimal_grouped(value: f64, decimal_places: u8) -> String {
    add_thousands_separator(&format_decimal(value, decimal_places))
}

/// Format a ratio (e.g. -0.5) as a signed percentage with one decimal.
pub fn format_change_pct(change: f64) -> String {
    format!("{:.1}%", change * 100.0)
}

/// Format a number in general form: integers without a decimal point,
/// decimals with trailing zeros trimmed.
pub fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{:.0}", value);
    }

    let formatted = format!("{:.10}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Add thousands separators to a numeric string.
fn add_thousands_separator(s: &str) -> String {
    let parts: Vec<&str> = s.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    let negative = integer_part.starts_with('-');
    let digits: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::new();
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if negative {
        result = format!("-{}", result);
    }

    if let Some(decimal) = decimal_part {
        result.push('.');
        result.push_str(decimal);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(5.0, 3), "5.000");
        assert_eq!(format_decimal(10.456, 2), "10.46");
        assert_eq!(format_decimal(-0.5, 1), "-0.5");
    }

    #[test]
    fn test_format_decimal_grouped() {
        assert_eq!(format_decimal_grouped(1234.5, 2), "1,234.50");
        assert_eq!(format_decimal_grouped(-1234567.0, 0), "-1,234,567");
        assert_eq!(format_decimal_grouped(999.0, 2), "999.00");
    }

    #[test]
    fn test_format_change_pct() {
        assert_eq!(format_change_pct(-0.5), "-50.0%");
        assert_eq!(format_change_pct(0.0), "0.0%");
        assert_eq!(format_change_pct(0.125), "12.5%");
    }

    #[test]
    fn test_format_general() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(10.0), "10");
        assert_eq!(format_general(2.5), "2.5");
        assert_eq!(format_general(-3.0), "-3");
    }
}
