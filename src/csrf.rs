//! CSRF token issue and verification.
//!
//! The token lives in the session under [`TOKEN_KEY`]. Pages embed it with
//! [`csrf_input`] or [`csrf_meta`]; the handler receiving the submission
//! checks it with [`csrf_filter`].
//!
//! Verification is one-time: the stored token is regenerated after every
//! check, whether it passed or not. A page that submits twice (or two tabs
//! sharing a session) needs a fresh token for the second submission.

use std::fmt;

use crate::error::{SessionError, SessionErrorKind};
use crate::html;
use crate::session::{Session, SessionHost, TOKEN_KEY};
use crate::web::Request;

/// A CSRF token value that stays out of logs.
///
/// `Debug` and `Display` always print `[REDACTED]`. The raw value is only
/// reachable through [`expose_secret`](Self::expose_secret).
///
/// # Examples
///
/// ```
/// use web_helpers::session::{MemoryHost, MemoryRegistry, Session};
/// use web_helpers::csrf_token;
///
/// let mut session = Session::new(MemoryHost::new(MemoryRegistry::new()));
/// let token = csrf_token(&mut session).expect("session starts");
///
/// assert_eq!(format!("{token:?}"), "[REDACTED]");
/// assert_eq!(token.expose_secret().len(), 32);
/// ```
// Do NOT derive Debug or implement Deref/AsRef: both would put the raw token
// within reach of a `{:?}` in a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken {
    inner: String,
}

impl CsrfToken {
    fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Returns the raw token.
    pub fn expose_secret(&self) -> &str {
        &self.inner
    }
}

impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Starts the session if needed and returns its CSRF token.
///
/// # Errors
///
/// Returns a [`SessionError`] if the session cannot start, or with
/// [`SessionErrorKind::TokenUnavailable`] if the reserved key holds a
/// non-string value.
pub fn csrf_token<H: SessionHost>(session: &mut Session<H>) -> Result<CsrfToken, SessionError> {
    session
        .start()?
        .token()
        .map(CsrfToken::new)
        .ok_or_else(|| {
            SessionError::new(
                SessionErrorKind::TokenUnavailable,
                format!("session key `{TOKEN_KEY}` does not hold a string token"),
            )
        })
}

/// Renders a hidden form input carrying the CSRF token.
///
/// # Errors
///
/// Same as [`csrf_token`].
///
/// # Examples
///
/// ```
/// use web_helpers::session::{MemoryHost, MemoryRegistry, Session};
/// use web_helpers::csrf_input;
///
/// let mut session = Session::new(MemoryHost::new(MemoryRegistry::new()));
/// let input = csrf_input(&mut session).unwrap();
/// assert!(input.starts_with(r#"<input type="hidden" name="_token" value=""#));
/// ```
pub fn csrf_input<H: SessionHost>(session: &mut Session<H>) -> Result<String, SessionError> {
    let token = csrf_token(session)?;
    Ok(format!(
        r#"<input type="hidden" name="{TOKEN_KEY}" value="{}">"#,
        html::escape(token.expose_secret())
    ))
}

/// Renders a `<meta name="csrf-token">` tag for script-driven requests.
///
/// # Errors
///
/// Same as [`csrf_token`].
pub fn csrf_meta<H: SessionHost>(session: &mut Session<H>) -> Result<String, SessionError> {
    let token = csrf_token(session)?;
    Ok(format!(
        r#"<meta name="csrf-token" content="{}">"#,
        html::escape(token.expose_secret())
    ))
}

/// Checks `submitted` against the session token, then regenerates the token.
///
/// The token is consumed whether or not the check passes. A missing
/// submission never matches.
///
/// # Errors
///
/// Same as [`csrf_token`].
pub fn verify_token<H: SessionHost>(
    session: &mut Session<H>,
    submitted: Option<&str>,
) -> Result<bool, SessionError> {
    let expected = csrf_token(session)?;
    let matched = submitted.is_some_and(|s| constant_time_eq(s, expected.expose_secret()));

    session.regenerate_token();

    if !matched {
        tracing::warn!(
            session = %session.name(),
            submitted = submitted.is_some(),
            "csrf token mismatch"
        );
    }
    Ok(matched)
}

/// Checks the request's `_token` form field against the session token.
///
/// See [`verify_token`]; the session token is regenerated either way.
///
/// # Errors
///
/// Same as [`csrf_token`].
///
/// # Examples
///
/// ```
/// use web_helpers::session::{MemoryHost, MemoryRegistry, Session};
/// use web_helpers::web::Request;
/// use web_helpers::{csrf_filter, csrf_token};
///
/// let mut session = Session::new(MemoryHost::new(MemoryRegistry::new()));
/// let issued = csrf_token(&mut session).unwrap();
///
/// let mut request = Request::new("/transfer");
/// request.add_form_field("_token", issued.expose_secret());
///
/// assert!(csrf_filter(&mut session, &request).unwrap());
/// // Consumed: replaying the same token fails.
/// assert!(!csrf_filter(&mut session, &request).unwrap());
/// ```
pub fn csrf_filter<H: SessionHost>(
    session: &mut Session<H>,
    request: &Request,
) -> Result<bool, SessionError> {
    verify_token(session, request.form(TOKEN_KEY))
}

/// Compares two strings without short-circuiting on the first differing byte.
fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
