//! Minimal response values for redirects and JSON messages.

use serde_json::json;

/// A response the caller hands back to its framework.
///
/// Only status, headers and body are modelled; writing them out is the
/// framework's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Header name/value pairs, in the order they should be sent
    pub headers: Vec<(String, String)>,
    /// Response body
    pub body: String,
}

impl Response {
    /// Creates a response with no headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Appends a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Returns the first header with the given case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Builds a redirect to `url`.
///
/// Normally this is a `302` with a `Location` header. If `output_started` is
/// true the headers can no longer change, so the redirect is instead a page
/// that navigates from script.
///
/// # Examples
///
/// ```
/// use web_helpers::web::redirect_to;
///
/// let response = redirect_to("/login", false);
/// assert_eq!(response.status, 302);
/// assert_eq!(response.header("location"), Some("/login"));
/// ```
pub fn redirect_to(url: &str, output_started: bool) -> Response {
    if !output_started {
        return Response::new(302, "").with_header("Location", url);
    }

    // A JSON string literal is a valid JS string literal; `</` is split so the
    // URL cannot close the script element.
    let target = json!(url).to_string().replace("</", "<\\/");
    let body = format!(
        "<html lang=\"en\"><body>\
         <script type=\"text/javascript\">window.location.href = {target};</script>\
         </body></html>"
    );

    Response::new(200, body).with_header("Content-Type", "text/html; charset=utf-8")
}

/// Builds a JSON `{"message": .., "success": ..}` response.
///
/// # Examples
///
/// ```
/// use web_helpers::web::json_message;
///
/// let response = json_message(Some("Saved"), true);
/// assert_eq!(response.body, r#"{"message":"Saved","success":true}"#);
/// assert_eq!(response.header("Content-Type"), Some("application/json"));
/// ```
pub fn json_message(message: Option<&str>, success: bool) -> Response {
    let body = json!({ "message": message, "success": success });
    Response::new(200, body.to_string()).with_header("Content-Type", "application/json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_uses_location_header() {
        let response = redirect_to("https://example.com/next", false);
        assert_eq!(response.status, 302);
        assert_eq!(response.header("Location"), Some("https://example.com/next"));
        assert!(response.body.is_empty());
    }

    #[test]
    fn redirect_after_output_uses_script() {
        let response = redirect_to("/done", true);
        assert_eq!(response.status, 200);
        assert!(response.header("Location").is_none());
        assert!(response.body.contains(r#"window.location.href = "/done";"#));
    }

    #[test]
    fn redirect_script_cannot_break_out() {
        let response = redirect_to("/x\"</script><script>alert(1)//", true);
        assert!(!response.body.contains("</script><script>"));
        assert!(response.body.contains(r#"\""#));
    }

    #[test]
    fn json_message_without_message() {
        let response = json_message(None, false);
        assert_eq!(response.body, r#"{"message":null,"success":false}"#);
    }

    #[test]
    fn json_message_escapes_text() {
        let response = json_message(Some("say \"hi\""), true);
        let parsed: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(parsed["message"], "say \"hi\"");
    }
}
