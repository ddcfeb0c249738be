use std::fmt;

/// An operation the session host refused at its current lifecycle point.
///
/// Missing keys are never errors; they resolve to `None` or a caller-supplied
/// default. `SessionError` is reserved for the few host calls that can be
/// disallowed outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    /// The kind of refusal
    pub kind: SessionErrorKind,
    /// Human-readable message explaining the refusal
    pub message: String,
}

impl SessionError {
    /// Creates a new session error.
    pub fn new(kind: SessionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SessionError {}

/// The kind of session error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionErrorKind {
    /// Response output has begun, so the session cookie can no longer change
    OutputStarted,
    /// The identifier cannot be reassigned while a session is active
    SessionActive,
    /// The reserved token key holds no usable token
    TokenUnavailable,
}

impl fmt::Display for SessionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionErrorKind::OutputStarted => write!(f, "output already started"),
            SessionErrorKind::SessionActive => write!(f, "session already active"),
            SessionErrorKind::TokenUnavailable => write!(f, "token unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_kind_and_message() {
        let err = SessionError::new(SessionErrorKind::OutputStarted, "headers flushed at body");
        assert_eq!(
            err.to_string(),
            "output already started: headers flushed at body"
        );
    }

    #[test]
    fn error_kinds_compare() {
        let err = SessionError::new(SessionErrorKind::SessionActive, "x");
        assert_eq!(err.kind, SessionErrorKind::SessionActive);
        assert_ne!(err.kind, SessionErrorKind::TokenUnavailable);
    }
}
