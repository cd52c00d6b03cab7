use serde_json::Value;

/// Tolerant parser for the `GHG QUANTITY (METRIC TONS CO2e)` field.
///
/// Accepts a plain JSON number or a numeric-looking string with comma
/// thousands separators. Returns `None` for a missing field, a null, or
/// anything that does not parse as a float; the caller counts that record's
/// contribution as zero.
pub fn parse_quantity(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.replace(',', "").trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Normalizes a facility name into its grouping key: trimmed and lower-cased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Renders a normalized (lower-cased) key in title case: the first letter of
/// each alphabetic run is upper-cased, everything else is left as-is.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_quantity_plain_number() {
        assert_eq!(parse_quantity(Some(&json!(12345.67))), Some(12345.67));
    }

    #[test]
    fn test_parse_quantity_string_with_separators() {
        assert_eq!(parse_quantity(Some(&json!("2,000"))), Some(2000.0));
        assert_eq!(parse_quantity(Some(&json!("1,234,567.89"))), Some(1234567.89));
    }

    #[test]
    fn test_parse_quantity_plain_string() {
        assert_eq!(parse_quantity(Some(&json!("42.5"))), Some(42.5));
        assert_eq!(parse_quantity(Some(&json!(" 42.5 "))), Some(42.5));
    }

    #[test]
    fn test_parse_quantity_malformed() {
        assert_eq!(parse_quantity(Some(&json!("N/A"))), None);
        assert_eq!(parse_quantity(Some(&json!(""))), None);
        assert_eq!(parse_quantity(Some(&json!(null))), None);
        assert_eq!(parse_quantity(Some(&json!(["2000"]))), None);
    }

    #[test]
    fn test_parse_quantity_missing() {
        assert_eq!(parse_quantity(None), None);
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Acme Corp"), "acme corp");
        assert_eq!(normalize_name(" ACME CORP "), "acme corp");
        assert_eq!(normalize_name("acme corp"), "acme corp");
    }

    #[test]
    fn test_normalize_name_empty_after_trim() {
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("acme corp"), "Acme Corp");
        assert_eq!(title_case("st. louis cement plant"), "St. Louis Cement Plant");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_preserves_inner_whitespace() {
        assert_eq!(title_case("acme  corp"), "Acme  Corp");
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[-90.0, -92.0]), -91.0);
        assert_eq!(mean(&[30.0, 32.0]), 31.0);
    }
}
