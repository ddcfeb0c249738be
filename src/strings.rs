//! String case and pattern helpers.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::RngCore;
use regex::Regex;
use std::sync::OnceLock;

/// Determines whether `value` matches `pattern`, where `*` matches any run of characters.
///
/// The match is anchored at both ends. All other pattern characters are
/// literal. `*` does not match across a newline.
///
/// # Examples
///
/// ```
/// use web_helpers::strings;
///
/// assert!(strings::is("admin/*", "admin/users/7"));
/// assert!(strings::is("*.rs", "lib.rs"));
/// assert!(!strings::is("admin/*", "public/admin/x"));
/// ```
pub fn is(pattern: &str, value: &str) -> bool {
    if pattern == value {
        return true;
    }

    let quoted = regex::escape(pattern).replace(r"\*", ".*");
    Regex::new(&format!(r"\A{quoted}\z"))
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// Determines whether `haystack` contains any of the non-empty `needles`.
pub fn contains(haystack: &str, needles: &[&str]) -> bool {
    needles
        .iter()
        .any(|needle| !needle.is_empty() && haystack.contains(needle))
}

/// Determines whether `haystack` starts with any of the non-empty `needles`.
pub fn starts_with(haystack: &str, needles: &[&str]) -> bool {
    needles
        .iter()
        .any(|needle| !needle.is_empty() && haystack.starts_with(needle))
}

/// Converts a value to StudlyCaps.
///
/// `-` and `_` become spaces. The first character of every word is then
/// uppercased if it is an ASCII letter, where words are separated by spaces,
/// tabs, carriage returns, newlines, form feeds or vertical tabs. Finally the
/// spaces are removed; other whitespace is kept.
///
/// # Examples
///
/// ```
/// use web_helpers::strings;
///
/// assert_eq!(strings::studly("hello_world-again"), "HelloWorldAgain");
/// ```
pub fn studly(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut word_start = true;

    for ch in value.chars() {
        let ch = if matches!(ch, '-' | '_') { ' ' } else { ch };
        out.push(if word_start { ch.to_ascii_uppercase() } else { ch });
        word_start = matches!(ch, ' ' | '\t' | '\r' | '\n' | '\x0C' | '\x0B');
    }

    out.retain(|c| c != ' ');
    out
}

/// Converts a value to snake case using `delimiter` between words.
///
/// A value made only of lowercase letters is returned unchanged. Otherwise the
/// delimiter is inserted before each ASCII uppercase letter that follows a
/// character other than a newline, and the result is ASCII-lowercased.
/// Matches do not overlap, so runs of
/// capitals are only split every other letter (`"HTTPServer"` becomes
/// `"h_tt_pserver"`).
///
/// # Examples
///
/// ```
/// use web_helpers::strings;
///
/// assert_eq!(strings::snake("fooBarBaz", "_"), "foo_bar_baz");
/// assert_eq!(strings::snake("FooBar", "-"), "foo-bar");
/// ```
pub fn snake(value: &str, delimiter: &str) -> String {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_lowercase()) {
        return value.to_owned();
    }

    static BOUNDARY: OnceLock<Option<Regex>> = OnceLock::new();
    let Some(boundary) = BOUNDARY.get_or_init(|| Regex::new(r"(.)([A-Z])").ok()) else {
        return value.to_ascii_lowercase();
    };

    let replacement = format!("${{1}}{}${{2}}", delimiter.replace('$', "$$"));
    boundary
        .replace_all(value, replacement.as_str())
        .to_ascii_lowercase()
}

/// Generates an alphanumeric string of exactly `length` characters.
///
/// Characters are drawn from base64-encoded CSPRNG bytes with `/`, `+` and `=`
/// stripped, refilling until the requested length is reached.
pub fn random(length: usize) -> String {
    let mut out = String::with_capacity(length);
    let mut rng = rand::rng();

    while out.len() < length {
        let size = length - out.len();
        let mut bytes = vec![0u8; size];
        rng.fill_bytes(&mut bytes);

        out.extend(
            STANDARD
                .encode(&bytes)
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .take(size),
        );
    }

    out
}

/// Sanitizes a string key: lowercased, keeping only `a-z`, `0-9`, `_` and `-`.
///
/// # Examples
///
/// ```
/// use web_helpers::strings;
///
/// assert_eq!(strings::sanitize_key("My Key!_v2-x"), "mykey_v2-x");
/// ```
pub fn sanitize_key(key: &str) -> String {
    key.to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-'))
        .collect()
}
