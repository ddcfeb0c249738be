//! Loose coercions over session values.
//!
//! Session data is stored as [`serde_json::Value`]. Older callers of this kind
//! of store treat values loosely (a stored `"0"` reads as false, a numeric
//! string reads as a number); the helpers here make those coercions explicit.

use serde_json::Value;

/// Returns whether a value counts as "set" under loose boolean coercion.
///
/// Falsy values are `null`, `false`, `0`, `0.0`, `""`, `"0"`, and empty
/// sequences or maps. Everything else is truthy.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use web_helpers::value::is_truthy;
///
/// assert!(is_truthy(&json!("abc")));
/// assert!(!is_truthy(&json!("0")));
/// assert!(!is_truthy(&json!([])));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Returns whether `input` is a numeric string.
///
/// Leading and trailing whitespace, a sign, a fractional part and an exponent
/// are accepted. Hex, octal and binary prefixes are not.
pub fn is_numeric(input: &str) -> bool {
    let s = input.trim_matches(|c: char| c.is_ascii_whitespace());
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);

    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(at) => (&s[..at], Some(&s[at + 1..])),
        None => (s, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (mantissa, None),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.is_none_or(all_digits) {
        return false;
    }
    if int_part.is_empty() && frac_part.is_none_or(str::is_empty) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && all_digits(exp)
        }
    }
}

/// Largest result of [`absint`], the maximum signed 64-bit integer.
pub const ABSINT_MAX: u64 = i64::MAX as u64;

/// Converts a value to a non-negative integer.
///
/// Numbers are truncated toward zero. Strings contribute their leading
/// numeric portion, which may carry a fraction and an exponent (`"1e3"` is
/// `1000`, `"2.5e1px"` is `25`). Booleans become `0` or `1`, and everything
/// else is `0`. Results saturate at [`ABSINT_MAX`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use web_helpers::value::absint;
///
/// assert_eq!(absint(&json!(-42)), 42);
/// assert_eq!(absint(&json!(" 12abc")), 12);
/// assert_eq!(absint(&json!(3.9)), 3);
/// assert_eq!(absint(&json!("1e3")), 1000);
/// ```
pub fn absint(value: &Value) -> u64 {
    match value {
        Value::Bool(b) => u64::from(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.unsigned_abs().min(ABSINT_MAX)
            } else if let Some(u) = n.as_u64() {
                u.min(ABSINT_MAX)
            } else {
                n.as_f64().map_or(0, truncate_abs)
            }
        }
        Value::String(s) => leading_number(s),
        _ => 0,
    }
}

/// Absolute value of the leading decimal number in `s`, or 0 if there is none.
fn leading_number(s: &str) -> u64 {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let bytes = s.as_bytes();
    let digits = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits(start);
    let mut end = start + int_digits;
    let mut fractional = false;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
            fractional = true;
        }
    }
    if end == start {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
            fractional = true;
        }
    }

    if fractional {
        s[..end].parse::<f64>().map_or(0, truncate_abs)
    } else {
        // Overflowing digit runs saturate rather than wrap.
        s[start..end]
            .parse::<u64>()
            .map_or(ABSINT_MAX, |n| n.min(ABSINT_MAX))
    }
}

fn truncate_abs(f: f64) -> u64 {
    let f = f.abs().trunc();
    if f.is_nan() {
        0
    } else if f >= ABSINT_MAX as f64 {
        ABSINT_MAX
    } else {
        f as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values() {
        for v in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!("0"),
            json!([]),
            json!({}),
        ] {
            assert!(!is_truthy(&v), "{v} should be falsy");
        }
    }

    #[test]
    fn truthy_values() {
        for v in [
            json!(true),
            json!(1),
            json!(-0.5),
            json!("false"),
            json!("00"),
            json!([0]),
            json!({"a": null}),
        ] {
            assert!(is_truthy(&v), "{v} should be truthy");
        }
    }

    #[test]
    fn numeric_strings() {
        for s in ["0", "42", "-7", "+3.14", ".5", "5.", "1e10", "2.5E-3", "  12  "] {
            assert!(is_numeric(s), "{s:?} should be numeric");
        }
    }

    #[test]
    fn non_numeric_strings() {
        for s in ["", " ", ".", "-", "abc", "12abc", "0x1A", "1e", "1e+", "1.2.3"] {
            assert!(!is_numeric(s), "{s:?} should not be numeric");
        }
    }

    #[test]
    fn absint_coerces() {
        assert_eq!(absint(&json!(true)), 1);
        assert_eq!(absint(&json!(false)), 0);
        assert_eq!(absint(&json!(-3.7)), 3);
        assert_eq!(absint(&json!("-15 apples")), 15);
        assert_eq!(absint(&json!("apples")), 0);
        assert_eq!(absint(&json!(null)), 0);
        assert_eq!(absint(&json!([1, 2])), 0);
        assert_eq!(absint(&json!(i64::MIN)), ABSINT_MAX);
        assert_eq!(absint(&json!(u64::MAX)), ABSINT_MAX);
        assert_eq!(absint(&json!(1e300)), ABSINT_MAX);
    }

    #[test]
    fn absint_saturates_long_digit_runs() {
        assert_eq!(absint(&json!("99999999999999999999999")), ABSINT_MAX);
        assert_eq!(absint(&json!("-99999999999999999999999")), ABSINT_MAX);
    }

    #[test]
    fn absint_reads_fraction_and_exponent() {
        assert_eq!(absint(&json!("1e3")), 1000);
        assert_eq!(absint(&json!(" 2.5e1px")), 25);
        assert_eq!(absint(&json!("-7.9")), 7);
        assert_eq!(absint(&json!(".5e1")), 5);
        assert_eq!(absint(&json!("5.")), 5);
        assert_eq!(absint(&json!("3e")), 3);
        assert_eq!(absint(&json!("4e+x")), 4);
        assert_eq!(absint(&json!(".")), 0);
        assert_eq!(absint(&json!("e5")), 0);
        assert_eq!(absint(&json!("1e400")), ABSINT_MAX);
    }
}
