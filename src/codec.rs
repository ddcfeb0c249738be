//! Opportunistic encoding helpers for stored values.
//!
//! Values persisted as text (options tables, cookie payloads, form echoes)
//! are sometimes JSON and sometimes plain strings. These helpers decode or
//! encode only when the shape calls for it.

use serde_json::Value;

use crate::value::is_numeric;

/// Decodes `original` only if it holds a JSON map or sequence.
///
/// Numeric strings, JSON scalars and invalid JSON are returned unchanged as
/// a string value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use web_helpers::codec::maybe_decode;
///
/// assert_eq!(maybe_decode(r#"{"a":1}"#), json!({"a": 1}));
/// assert_eq!(maybe_decode("42"), json!("42"));
/// assert_eq!(maybe_decode("\"quoted\""), json!("\"quoted\""));
/// ```
pub fn maybe_decode(original: &str) -> Value {
    if is_numeric(original) {
        return Value::String(original.to_owned());
    }

    match serde_json::from_str::<Value>(original) {
        Ok(decoded @ (Value::Object(_) | Value::Array(_))) => decoded,
        _ => Value::String(original.to_owned()),
    }
}

/// Encodes maps and sequences as JSON text; other values pass through.
pub fn maybe_encode(data: &Value) -> Value {
    match data {
        Value::Object(_) | Value::Array(_) => Value::String(data.to_string()),
        other => other.clone(),
    }
}

/// Sniffs whether `data` looks like a value in the legacy `type:...;`
/// serialization format.
///
/// In strict mode the string must end in `;` or `}` and scalar forms must be
/// terminated exactly; lenient mode only requires a terminator somewhere
/// plausible. This inspects shape only and never decodes.
///
/// # Examples
///
/// ```
/// use web_helpers::codec::is_serialized;
///
/// assert!(is_serialized("i:42;", true));
/// assert!(is_serialized(r#"s:5:"hello";"#, true));
/// assert!(is_serialized("a:1:{i:0;s:1:\"x\";}", true));
/// assert!(!is_serialized("hello", true));
/// ```
pub fn is_serialized(data: &str, strict: bool) -> bool {
    let data = data.trim_matches([' ', '\t', '\n', '\r', '\0', '\x0B']);
    let bytes = data.as_bytes();

    if data == "N;" {
        return true;
    }
    if bytes.len() < 4 || bytes[1] != b':' {
        return false;
    }

    if strict {
        if !matches!(bytes.last(), Some(b';' | b'}')) {
            return false;
        }
    } else {
        let semicolon = data.find(';');
        let brace = data.find('}');

        if semicolon.is_none() && brace.is_none() {
            return false;
        }
        if semicolon.is_some_and(|at| at < 3) || brace.is_some_and(|at| at < 4) {
            return false;
        }
    }

    match bytes[0] {
        b's' => {
            let quoted = if strict {
                bytes[bytes.len() - 2] == b'"'
            } else {
                data.contains('"')
            };
            quoted && has_length_prefix(bytes)
        }
        b'a' | b'O' => has_length_prefix(bytes),
        b'b' | b'i' | b'd' => has_scalar_body(bytes, strict),
        _ => false,
    }
}

/// `t:<digits>:` prefix shared by strings, arrays and objects.
fn has_length_prefix(bytes: &[u8]) -> bool {
    let digits = bytes[2..].iter().take_while(|b| b.is_ascii_digit()).count();
    digits > 0 && bytes.get(2 + digits) == Some(&b':')
}

/// `t:<number>;` body for booleans, integers and doubles.
fn has_scalar_body(bytes: &[u8], strict: bool) -> bool {
    let body = bytes[2..]
        .iter()
        .take_while(|b| b.is_ascii_digit() || matches!(b, b'.' | b'E' | b'-'))
        .count();
    let terminator = 2 + body;

    body > 0 && bytes.get(terminator) == Some(&b';') && (!strict || terminator + 1 == bytes.len())
}
