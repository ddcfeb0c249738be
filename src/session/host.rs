//! The host-side session primitives the facade is built on.

use crate::array::Attributes;
use crate::error::SessionError;

/// Lifecycle and storage primitives supplied by the hosting environment.
///
/// A host owns the cookie-indexed server-side store: it decides how
/// identifiers are issued, where attributes are persisted and when output
/// has progressed too far for the session cookie to change. The
/// [`Session`](super::Session) facade only calls these primitives.
///
/// An implementation exposes one request's view of one session. Hosts that
/// serve several requests for the same identifier concurrently must provide
/// their own locking; nothing here serializes writers.
pub trait SessionHost {
    /// Begins (or resumes) the session for the current request.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the host cannot begin a session at this
    /// point, for example because response output has already started.
    fn begin(&mut self) -> Result<(), SessionError>;

    /// Returns the active session identifier, or `None` if no session is active.
    fn id(&self) -> Option<&str>;

    /// Requests a specific identifier for the next [`begin`](Self::begin).
    ///
    /// Returns the previously requested identifier, or an empty string if none
    /// was set.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if reassignment is not permitted at the
    /// current lifecycle point.
    fn set_id(&mut self, id: &str) -> Result<String, SessionError>;

    /// Returns the session name (the cookie the identifier travels in).
    fn name(&self) -> &str;

    /// Destroys the stored session. Returns `false` if no session was active.
    fn destroy(&mut self) -> bool;

    /// Clears every attribute while keeping the session active.
    ///
    /// Returns `false` if no session was active.
    fn clear(&mut self) -> bool;

    /// Returns the live attribute map.
    fn attributes(&self) -> &Attributes;

    /// Returns the live attribute map for mutation.
    fn attributes_mut(&mut self) -> &mut Attributes;
}
