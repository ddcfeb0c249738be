//! In-process session host.
//!
//! [`MemoryRegistry`] plays the part of the server-side store that outlives a
//! request; [`MemoryHost`] is one request's handle onto it. Attributes are
//! loaded when the session begins and written back only on
//! [`MemoryHost::commit`], the way a cookie-indexed store persists at request
//! end.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::SessionHost;
use crate::array::Attributes;
use crate::error::{SessionError, SessionErrorKind};
use crate::token;

/// Cookie name used when none is configured.
pub const DEFAULT_SESSION_NAME: &str = "session";

/// Random bytes in a generated session identifier.
const SESSION_ID_BYTES: usize = 16;

/// Shared in-memory store of session attributes, keyed by identifier.
///
/// Clones share the same underlying store.
///
/// # Examples
///
/// ```
/// use web_helpers::session::MemoryRegistry;
///
/// let registry = MemoryRegistry::new();
/// assert!(registry.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    sessions: Rc<RefCell<HashMap<String, Attributes>>>,
}

impl MemoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the attributes stored under `id`.
    pub fn load(&self, id: &str) -> Option<Attributes> {
        self.sessions.borrow().get(id).cloned()
    }

    /// Stores `attributes` under `id`, replacing what was there.
    pub fn save(&self, id: &str, attributes: Attributes) {
        self.sessions.borrow_mut().insert(id.to_owned(), attributes);
    }

    /// Removes the session stored under `id`. Returns whether it existed.
    pub fn remove(&self, id: &str) -> bool {
        self.sessions.borrow_mut().remove(id).is_some()
    }

    /// Returns whether a session is stored under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.sessions.borrow().contains_key(id)
    }

    /// Returns the number of stored sessions.
    pub fn len(&self) -> usize {
        self.sessions.borrow().len()
    }

    /// Returns `true` if no sessions are stored.
    pub fn is_empty(&self) -> bool {
        self.sessions.borrow().is_empty()
    }
}

/// One request's view of a session held in a [`MemoryRegistry`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use web_helpers::session::{MemoryHost, MemoryRegistry, Session};
///
/// let registry = MemoryRegistry::new();
///
/// // First request: start, write, persist.
/// let mut session = Session::new(MemoryHost::new(registry.clone()));
/// session.start().expect("session starts");
/// session.set("user.name", json!("ada"));
/// let id = session.id().expect("active").to_string();
/// session.host_mut().commit();
///
/// // Second request arrives with the cookie.
/// let mut session = Session::new(MemoryHost::new(registry).with_cookie(&id));
/// session.start().expect("session resumes");
/// assert_eq!(session.get("user.name"), Some(&json!("ada")));
/// ```
#[derive(Debug)]
pub struct MemoryHost {
    registry: MemoryRegistry,
    name: String,
    cookie_id: Option<String>,
    requested_id: Option<String>,
    active_id: Option<String>,
    attributes: Attributes,
    output_started: bool,
    strict_ids: bool,
}

impl MemoryHost {
    /// Creates a host over `registry` with no incoming cookie.
    pub fn new(registry: MemoryRegistry) -> Self {
        Self {
            registry,
            name: DEFAULT_SESSION_NAME.to_owned(),
            cookie_id: None,
            requested_id: None,
            active_id: None,
            attributes: Attributes::new(),
            output_started: false,
            strict_ids: true,
        }
    }

    /// Sets the session (cookie) name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Supplies the identifier carried by the incoming request cookie.
    pub fn with_cookie(mut self, id: impl Into<String>) -> Self {
        self.cookie_id = Some(id.into());
        self
    }

    /// Controls whether unknown cookie identifiers are rejected.
    ///
    /// When enabled (the default), a cookie naming a session the registry has
    /// never stored gets a fresh identifier instead, so a client cannot pick
    /// its own session id. Identifiers set through
    /// [`SessionHost::set_id`] are always honored.
    pub fn with_strict_ids(mut self, strict: bool) -> Self {
        self.strict_ids = strict;
        self
    }

    /// Marks response output as started.
    ///
    /// After this, the session can no longer begin and its identifier can no
    /// longer change.
    pub fn start_output(&mut self) {
        self.output_started = true;
    }

    /// Returns whether response output has started.
    pub fn output_started(&self) -> bool {
        self.output_started
    }

    /// Returns the registry this host reads from and writes to.
    pub fn registry(&self) -> &MemoryRegistry {
        &self.registry
    }

    /// Writes the current attributes back to the registry.
    ///
    /// Returns `false` if no session is active. The write replaces the stored
    /// attributes wholesale: if another request committed the same session
    /// since this one began, its changes are lost.
    pub fn commit(&mut self) -> bool {
        let Some(id) = self.active_id.as_deref() else {
            return false;
        };

        self.registry.save(id, self.attributes.clone());
        tracing::trace!(session = %self.name, keys = self.attributes.len(), "session committed");
        true
    }

    fn resolve_id(&mut self) -> String {
        if let Some(id) = self.requested_id.take().filter(|id| !id.is_empty()) {
            return id;
        }

        match self.cookie_id.take() {
            Some(id) if !id.is_empty() && (!self.strict_ids || self.registry.contains(&id)) => id,
            Some(_) => {
                tracing::debug!(session = %self.name, "unknown session cookie replaced");
                token::generate(SESSION_ID_BYTES)
            }
            None => token::generate(SESSION_ID_BYTES),
        }
    }
}

impl SessionHost for MemoryHost {
    fn begin(&mut self) -> Result<(), SessionError> {
        if self.active_id.is_some() {
            return Ok(());
        }
        if self.output_started {
            return Err(SessionError::new(
                SessionErrorKind::OutputStarted,
                "cannot begin a session after output has started",
            ));
        }

        let id = self.resolve_id();
        self.attributes = self.registry.load(&id).unwrap_or_default();
        self.active_id = Some(id);

        tracing::debug!(session = %self.name, "session begun");
        Ok(())
    }

    fn id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    fn set_id(&mut self, id: &str) -> Result<String, SessionError> {
        if self.active_id.is_some() {
            return Err(SessionError::new(
                SessionErrorKind::SessionActive,
                "session identifier cannot change while the session is active",
            ));
        }
        if self.output_started {
            return Err(SessionError::new(
                SessionErrorKind::OutputStarted,
                "session identifier cannot change after output has started",
            ));
        }

        Ok(self
            .requested_id
            .replace(id.to_owned())
            .unwrap_or_default())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn destroy(&mut self) -> bool {
        let Some(id) = self.active_id.take() else {
            return false;
        };

        self.registry.remove(&id);
        self.attributes.clear();
        tracing::debug!(session = %self.name, "session destroyed");
        true
    }

    fn clear(&mut self) -> bool {
        if self.active_id.is_none() {
            return false;
        }

        self.attributes.clear();
        true
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}
