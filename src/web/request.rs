//! Framework-agnostic view of an incoming HTTP request.

use std::collections::HashMap;

/// The parts of an HTTP request the helpers in this crate read.
///
/// `Request` holds simple, owned data so it does not couple to any specific
/// framework's request type. Framework glue fills it in from its own request
/// (server variables, headers, parsed form body) and passes it by reference.
///
/// Header names are matched case-insensitively. Form fields are matched
/// exactly.
///
/// # Examples
///
/// ```
/// use web_helpers::web::Request;
///
/// let mut request = Request::new("/search?q=rust");
/// request.set_host("example.com");
/// request.add_header("X-Requested-With", "XMLHttpRequest");
/// request.add_form_field("_token", "abc123");
///
/// assert_eq!(request.current_url(), "http://example.com/search?q=rust");
/// assert!(request.is_ajax());
/// assert_eq!(request.form("_token"), Some("abc123"));
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    /// Request target as sent by the client (path and query)
    uri: String,
    /// Whether the request arrived over TLS
    https: bool,
    /// `Host` header, if the client sent one
    host: Option<String>,
    /// Configured server name, used when no `Host` header is present
    server_name: String,
    /// Port the server accepted the connection on
    server_port: u16,
    /// User authenticated by the server itself (HTTP basic auth)
    remote_user: Option<String>,
    /// Request headers, keyed by lowercased name
    headers: HashMap<String, String>,
    /// Submitted form fields
    form: HashMap<String, String>,
}

impl Request {
    /// Creates a plain-HTTP request for `uri` on `localhost:80`.
    ///
    /// Use the setter methods to fill in the rest.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            https: false,
            host: None,
            server_name: "localhost".to_owned(),
            server_port: 80,
            remote_user: None,
            headers: HashMap::new(),
            form: HashMap::new(),
        }
    }

    /// Marks whether the request arrived over HTTPS.
    pub fn set_https(&mut self, https: bool) {
        self.https = https;
    }

    /// Sets the `Host` header value.
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = Some(host.into());
    }

    /// Sets the server name and port used when no `Host` header is present.
    pub fn set_server(&mut self, name: impl Into<String>, port: u16) {
        self.server_name = name.into();
        self.server_port = port;
    }

    /// Sets the server-authenticated user.
    pub fn set_remote_user(&mut self, user: impl Into<String>) {
        self.remote_user = Some(user.into());
    }

    /// Adds a header, replacing any previous value for the same name.
    pub fn add_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
    }

    /// Adds a submitted form field.
    pub fn add_form_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.form.insert(name.into(), value.into());
    }

    /// Returns the request target.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns whether the request arrived over HTTPS.
    pub fn is_https(&self) -> bool {
        self.https
    }

    /// Returns a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Returns a submitted form field.
    pub fn form(&self, name: &str) -> Option<&str> {
        self.form.get(name).map(String::as_str)
    }

    /// Reconstructs the absolute URL of this request.
    ///
    /// The `Host` header is used verbatim when present. Otherwise the server
    /// name is used, with the port appended unless it is the scheme default.
    /// A remote user is included as `user@`.
    pub fn current_url(&self) -> String {
        let scheme = if self.https { "https" } else { "http" };
        let user = self
            .remote_user
            .as_deref()
            .filter(|u| !u.is_empty())
            .map(|u| format!("{u}@"))
            .unwrap_or_default();

        let authority = match self.host.as_deref().filter(|h| !h.is_empty()) {
            Some(host) => host.to_owned(),
            None => {
                let default_port = if self.https { 443 } else { 80 };
                if self.server_port == default_port {
                    self.server_name.clone()
                } else {
                    format!("{}:{}", self.server_name, self.server_port)
                }
            }
        };

        format!("{scheme}://{user}{authority}{}", self.uri)
    }

    /// Returns whether this is an XMLHttpRequest (`X-Requested-With` header).
    pub fn is_ajax(&self) -> bool {
        self.header("x-requested-with")
            .is_some_and(|v| v.eq_ignore_ascii_case("xmlhttprequest"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_new_defaults() {
        let request = Request::new("/");
        assert_eq!(request.uri(), "/");
        assert!(!request.is_https());
        assert_eq!(request.current_url(), "http://localhost/");
    }

    #[test]
    fn headers_are_case_insensitive() {
        let mut request = Request::new("/");
        request.add_header("Content-Type", "text/html");
        assert_eq!(request.header("content-type"), Some("text/html"));
        assert_eq!(request.header("CONTENT-TYPE"), Some("text/html"));
        assert_eq!(request.header("accept"), None);
    }

    #[test]
    fn form_fields_are_exact() {
        let mut request = Request::new("/");
        request.add_form_field("Email", "a@b.c");
        assert_eq!(request.form("Email"), Some("a@b.c"));
        assert_eq!(request.form("email"), None);
    }

    #[test]
    fn current_url_prefers_host_header() {
        let mut request = Request::new("/path?x=1");
        request.set_server("internal", 8080);
        request.set_host("public.example:8443");
        request.set_https(true);
        assert_eq!(request.current_url(), "https://public.example:8443/path?x=1");
    }

    #[test]
    fn current_url_appends_non_default_port() {
        let mut request = Request::new("/a");
        request.set_server("example.org", 8080);
        assert_eq!(request.current_url(), "http://example.org:8080/a");

        request.set_https(true);
        request.set_server("example.org", 443);
        assert_eq!(request.current_url(), "https://example.org/a");

        request.set_server("example.org", 80);
        assert_eq!(request.current_url(), "https://example.org:80/a");
    }

    #[test]
    fn current_url_includes_remote_user() {
        let mut request = Request::new("/admin");
        request.set_host("example.com");
        request.set_remote_user("alice");
        assert_eq!(request.current_url(), "http://alice@example.com/admin");
    }

    #[test]
    fn ajax_detection() {
        let mut request = Request::new("/");
        assert!(!request.is_ajax());

        request.add_header("x-requested-with", "xmlhttprequest");
        assert!(request.is_ajax());

        request.add_header("X-Requested-With", "fetch");
        assert!(!request.is_ajax());
    }

    #[test]
    fn clones_are_independent() {
        let mut request = Request::new("/");
        request.add_form_field("k", "v");

        let mut copy = request.clone();
        copy.add_form_field("k", "changed");

        assert_eq!(request.form("k"), Some("v"));
        assert_eq!(copy.form("k"), Some("changed"));
    }
}
