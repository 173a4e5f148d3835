/// Numeric coercion for raw store values.
///
/// The store hands back numbers, strings, locale-formatted strings with a
/// comma decimal separator, empty strings, and nulls — often in the same
/// column. All of that funnels through here with one documented failure
/// mode: anything that is not a finite number comes back as `None`. Never
/// zero, never a panic, never an error value the aggregation layer has to
/// special-case.

use serde_json::Value;

/// Coerces a raw JSON value to a finite `f64`.
///
/// Accepts JSON numbers and numeric strings (with either `.` or `,` as the
/// decimal separator, surrounding whitespace tolerated). Null, empty
/// strings, booleans, and unparseable strings are all "no observation".
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
        }
        _ => None,
    }
}

/// Coerces a raw JSON value to an integer code (weather / wave codes).
///
/// Codes arrive as integers, floats with zero fraction, or strings; a
/// fractional value is not a valid code and maps to `None`.
pub fn coerce_code(value: &Value) -> Option<i64> {
    let v = coerce_number(value)?;
    if v.fract() == 0.0 { Some(v as i64) } else { None }
}

/// Coerces a raw JSON value to a non-empty trimmed string (direction
/// labels, station names).
pub fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Rounds to one decimal place, the display precision used throughout the
/// reports and forecasts.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_number_accepts_json_numbers() {
        assert_eq!(coerce_number(&json!(35.2)), Some(35.2));
        assert_eq!(coerce_number(&json!(0)), Some(0.0));
        assert_eq!(coerce_number(&json!(-4)), Some(-4.0));
    }

    #[test]
    fn test_coerce_number_accepts_numeric_strings() {
        assert_eq!(coerce_number(&json!("35.2")), Some(35.2));
        assert_eq!(coerce_number(&json!(" 18 ")), Some(18.0));
    }

    #[test]
    fn test_coerce_number_accepts_comma_decimal_separator() {
        assert_eq!(coerce_number(&json!("12,5")), Some(12.5));
    }

    #[test]
    fn test_coerce_number_failure_is_absent_not_zero() {
        assert_eq!(coerce_number(&json!("")), None);
        assert_eq!(coerce_number(&json!("  ")), None);
        assert_eq!(coerce_number(&json!("n/a")), None);
        assert_eq!(coerce_number(&Value::Null), None);
        assert_eq!(coerce_number(&json!(true)), None);
    }

    #[test]
    fn test_coerce_code_from_number_and_string() {
        assert_eq!(coerce_code(&json!(29)), Some(29));
        assert_eq!(coerce_code(&json!("95")), Some(95));
        assert_eq!(coerce_code(&json!(17.0)), Some(17));
    }

    #[test]
    fn test_coerce_code_rejects_fractional_values() {
        assert_eq!(coerce_code(&json!(17.5)), None);
    }

    #[test]
    fn test_coerce_string_trims_and_rejects_empty() {
        assert_eq!(coerce_string(&json!(" NE ")), Some("NE".to_string()));
        assert_eq!(coerce_string(&json!("")), None);
        assert_eq!(coerce_string(&Value::Null), None);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(28.6075), 28.6);
        assert_eq!(round1(29.25), 29.3);  // rounds half away from zero
        assert_eq!(round1(-0.05), -0.1);
    }
}
