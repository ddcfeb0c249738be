//! HTML escaping.

mod entities;

/// Escapes HTML special characters and trims surrounding whitespace.
///
/// Both quote styles are escaped, so the result is safe inside single- or
/// double-quoted attribute values as well as element content. Every other
/// character with an HTML 4.01 named entity is written as that entity
/// (`é` becomes `&eacute;`); characters without one are kept as they are.
///
/// Only spaces, tabs, newlines, carriage returns, NUL and vertical tabs are
/// trimmed.
///
/// # Examples
///
/// ```
/// use web_helpers::html;
///
/// assert_eq!(
///     html::escape(" <a href=\"x\">Tom & Jerry's</a> "),
///     "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
/// );
/// assert_eq!(html::escape("café €5"), "caf&eacute; &euro;5");
/// ```
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => match entities::name(ch) {
                Some(name) => {
                    escaped.push('&');
                    escaped.push_str(name);
                    escaped.push(';');
                }
                None => escaped.push(ch),
            },
        }
    }
    escaped
        .trim_matches([' ', '\t', '\n', '\r', '\0', '\x0B'])
        .to_owned()
}
