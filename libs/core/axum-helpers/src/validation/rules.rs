//! Predicates for [`Rule`](super::Rule), plus the coercions used to turn a
//! validated raw value into a typed one.
//!
//! Every predicate works on the value's text form: strings as-is, numbers in
//! their shortest decimal rendering, booleans as `true`/`false`, an absent or
//! `null` value as the empty string. Arrays and objects render as their JSON
//! text, so they are never empty and never numeric.

use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::LazyLock;

static INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());

static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").unwrap());

pub fn text_form(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(Value::Bool(b)) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Some(Value::Number(n)) => Cow::Owned(number_text(n)),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

/// Integral floats render without a fractional part (`5.0` -> `5`).
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// Optional sign followed by decimal digits only.
pub fn is_int(value: Option<&Value>) -> bool {
    INT_RE.is_match(&text_form(value))
}

/// JSON numbers always pass; strings must look like a decimal number.
pub fn is_numeric(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(_)) => true,
        Some(Value::String(s)) => NUMERIC_RE.is_match(s),
        _ => false,
    }
}

/// Text form has at least one character; whitespace counts.
pub fn not_empty(value: Option<&Value>) -> bool {
    !text_form(value).is_empty()
}

/// Text form is non-empty after trimming whitespace.
pub fn not_blank(value: Option<&Value>) -> bool {
    !text_form(value).trim().is_empty()
}

/// Text form is one of `true`, `false`, `1`, `0`.
pub fn is_boolean(value: Option<&Value>) -> bool {
    matches!(&*text_form(value), "true" | "false" | "1" | "0")
}

/// Coerced number is finite and strictly greater than zero.
///
/// Digit strings too long for `f64` coerce to infinity and are rejected.
pub fn is_positive(value: Option<&Value>) -> bool {
    let n = loose_number(value);
    n.is_finite() && n > 0.0
}

/// Loose numeric coercion.
///
/// Numbers are taken as-is. Strings are trimmed; the empty string is `0`
/// and anything unparseable is NaN. `true` is `1`, `false` and `null` are
/// `0`. Absent values, arrays and objects are NaN.
pub fn loose_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Bool(true)) => 1.0,
        Some(Value::Bool(false)) | Some(Value::Null) => 0.0,
        _ => f64::NAN,
    }
}

/// Boolean for a value that passed [`is_boolean`]; `None` otherwise.
pub fn to_bool(value: Option<&Value>) -> Option<bool> {
    match &*text_form(value) {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(value: Value) -> Option<&'static Value> {
        Some(Box::leak(Box::new(value)))
    }

    #[test]
    fn test_text_form() {
        assert_eq!(text_form(None), "");
        assert_eq!(text_form(v(json!(null))), "");
        assert_eq!(text_form(v(json!("abc"))), "abc");
        assert_eq!(text_form(v(json!(42))), "42");
        assert_eq!(text_form(v(json!(5.0))), "5");
        assert_eq!(text_form(v(json!(2.5))), "2.5");
        assert_eq!(text_form(v(json!(true))), "true");
        assert_eq!(text_form(v(json!([]))), "[]");
    }

    #[test]
    fn test_is_int() {
        assert!(is_int(v(json!("1"))));
        assert!(is_int(v(json!("-12"))));
        assert!(is_int(v(json!("+3"))));
        assert!(is_int(v(json!(7))));
        assert!(!is_int(v(json!("abc"))));
        assert!(!is_int(v(json!("1.5"))));
        assert!(!is_int(v(json!(""))));
        assert!(!is_int(None));
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric(v(json!(300))));
        assert!(is_numeric(v(json!(-2.5))));
        assert!(is_numeric(v(json!("10"))));
        assert!(is_numeric(v(json!(".5"))));
        assert!(is_numeric(v(json!("-0.25"))));
        assert!(!is_numeric(v(json!("Hola"))));
        assert!(!is_numeric(v(json!("1e5"))));
        assert!(!is_numeric(v(json!(""))));
        assert!(!is_numeric(v(json!(true))));
        assert!(!is_numeric(v(json!(null))));
        assert!(!is_numeric(None));
    }

    #[test]
    fn test_not_empty_keeps_whitespace() {
        assert!(not_empty(v(json!("Monitor"))));
        assert!(not_empty(v(json!(0))));
        assert!(not_empty(v(json!(false))));
        assert!(not_empty(v(json!("   "))));
        assert!(!not_empty(v(json!(""))));
        assert!(!not_empty(v(json!(null))));
        assert!(!not_empty(None));
    }

    #[test]
    fn test_not_blank_trims() {
        assert!(not_blank(v(json!("Monitor"))));
        assert!(not_blank(v(json!(0))));
        assert!(!not_blank(v(json!("   "))));
        assert!(!not_blank(v(json!("\t\n"))));
        assert!(!not_blank(None));
    }

    #[test]
    fn test_is_boolean() {
        assert!(is_boolean(v(json!(true))));
        assert!(is_boolean(v(json!(false))));
        assert!(is_boolean(v(json!("true"))));
        assert!(is_boolean(v(json!("0"))));
        assert!(is_boolean(v(json!(1))));
        assert!(!is_boolean(v(json!("yes"))));
        assert!(!is_boolean(v(json!(2))));
        assert!(!is_boolean(None));
    }

    #[test]
    fn test_loose_number() {
        assert_eq!(loose_number(v(json!(3.5))), 3.5);
        assert_eq!(loose_number(v(json!(" 12 "))), 12.0);
        assert_eq!(loose_number(v(json!(""))), 0.0);
        assert_eq!(loose_number(v(json!(true))), 1.0);
        assert_eq!(loose_number(v(json!(null))), 0.0);
        assert!(loose_number(v(json!("Hola"))).is_nan());
        assert!(loose_number(v(json!([1]))).is_nan());
        assert!(loose_number(None).is_nan());
    }

    #[test]
    fn test_is_positive() {
        assert!(is_positive(v(json!(0.01))));
        assert!(is_positive(v(json!("5"))));
        assert!(!is_positive(v(json!(0))));
        assert!(!is_positive(v(json!(-1))));
        assert!(!is_positive(v(json!("Hola"))));
        assert!(!is_positive(None));
    }

    #[test]
    fn test_is_positive_rejects_overflowing_digits() {
        let huge = format!("1{}", "0".repeat(400));
        assert!(is_numeric(v(json!(huge.clone()))));
        assert!(loose_number(v(json!(huge.clone()))).is_infinite());
        assert!(!is_positive(v(json!(huge))));
    }

    #[test]
    fn test_to_bool() {
        assert_eq!(to_bool(v(json!(true))), Some(true));
        assert_eq!(to_bool(v(json!("0"))), Some(false));
        assert_eq!(to_bool(v(json!("maybe"))), None);
    }
}
