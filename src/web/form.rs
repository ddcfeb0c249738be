//! Form re-population helpers.
//!
//! After a failed submission the form is rendered again with the user's
//! input restored. These helpers read the submitted fields from a
//! [`Request`] and return the attribute text to splice into the markup.

use super::Request;
use crate::html;

const SELECTED: &str = r#" selected="selected""#;
const CHECKED: &str = r#" checked="checked""#;

/// Returns the submitted value of `field`, or `default` if it was not submitted.
///
/// With `escape` set, the submitted value is HTML-escaped. The default is
/// returned as given.
///
/// # Examples
///
/// ```
/// use web_helpers::web::{set_value, Request};
///
/// let mut request = Request::new("/signup");
/// request.add_form_field("name", "<b>Ada</b>");
///
/// assert_eq!(set_value(&request, "name", "", true), "&lt;b&gt;Ada&lt;/b&gt;");
/// assert_eq!(set_value(&request, "email", "you@example.com", true), "you@example.com");
/// ```
pub fn set_value(request: &Request, field: &str, default: &str, escape: bool) -> String {
    match request.form(field) {
        Some(value) if escape => html::escape(value),
        Some(value) => value.to_owned(),
        None => default.to_owned(),
    }
}

/// Returns `selected="selected"` when `field` was submitted as `value`.
///
/// Falls back to `default` when the field does not match.
pub fn set_select(request: &Request, field: &str, value: &str, default: bool) -> &'static str {
    mark_if(request, field, value, default, SELECTED)
}

/// Returns `checked="checked"` when checkbox `field` was submitted as `value`.
pub fn set_checkbox(request: &Request, field: &str, value: &str, default: bool) -> &'static str {
    mark_if(request, field, value, default, CHECKED)
}

/// Returns `checked="checked"` when radio `field` was submitted as `value`.
pub fn set_radio(request: &Request, field: &str, value: &str, default: bool) -> &'static str {
    mark_if(request, field, value, default, CHECKED)
}

fn mark_if(
    request: &Request,
    field: &str,
    value: &str,
    default: bool,
    mark: &'static str,
) -> &'static str {
    if request.form(field) == Some(value) || default {
        mark
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted() -> Request {
        let mut request = Request::new("/profile");
        request.add_form_field("color", "blue");
        request.add_form_field("newsletter", "yes");
        request.add_form_field("bio", "  <i>hi</i>  ");
        request
    }

    #[test]
    fn set_value_raw_and_escaped() {
        let request = submitted();
        assert_eq!(set_value(&request, "bio", "", true), "&lt;i&gt;hi&lt;/i&gt;");
        assert_eq!(set_value(&request, "bio", "", false), "  <i>hi</i>  ");
    }

    #[test]
    fn set_select_matches_submitted_value() {
        let request = submitted();
        assert_eq!(set_select(&request, "color", "blue", false), SELECTED);
        assert_eq!(set_select(&request, "color", "red", false), "");
        assert_eq!(set_select(&request, "color", "red", true), SELECTED);
    }

    #[test]
    fn set_checkbox_and_radio() {
        let request = submitted();
        assert_eq!(set_checkbox(&request, "newsletter", "yes", false), CHECKED);
        assert_eq!(set_checkbox(&request, "terms", "yes", false), "");
        assert_eq!(set_radio(&request, "color", "blue", false), CHECKED);
        assert_eq!(set_radio(&request, "size", "m", true), CHECKED);
    }
}
