use std::ops::Index;

use serde_json::Value;

use super::{SessionConfig, SessionHost};
use crate::array::{self, Attributes};
use crate::error::SessionError;
use crate::token;
use crate::value::is_truthy;

/// Reserved key holding the CSRF token.
pub const TOKEN_KEY: &str = "_token";

/// Reserved key holding the ordered list of flashed keys.
pub const FLASH_KEY: &str = "flash";

static NULL: Value = Value::Null;

/// Session facade over a host-provided store.
///
/// `Session` adds dot-path access, flash messages and CSRF token management
/// on top of the primitives of a [`SessionHost`]. It holds no state of its
/// own beyond configuration; every read and write goes to the host's live
/// attribute map.
///
/// # Reserved keys
///
/// [`TOKEN_KEY`] and [`FLASH_KEY`] are ordinary attributes as far as
/// [`set`](Self::set) is concerned. Writing to them directly replaces the
/// CSRF token or the flash registry.
///
/// # Concurrent requests
///
/// [`push`](Self::push), [`flash`](Self::flash) and
/// [`delete_flash`](Self::delete_flash) read, modify and write back. When a
/// host lets two requests share one session identifier (two browser tabs),
/// the request that persists last wins and the other's changes are lost.
/// Serializing those requests is the host's job.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use web_helpers::session::{MemoryHost, MemoryRegistry, Session};
///
/// let mut session = Session::new(MemoryHost::new(MemoryRegistry::new()));
/// session.start().expect("session starts");
///
/// session.set("cart.items", json!(3));
/// session.flash("notice", "Saved");
///
/// assert_eq!(session.get("cart.items"), Some(&json!(3)));
/// assert!(session.token().is_some());
///
/// session.delete_flash();
/// assert_eq!(session.get("notice"), None);
/// ```
#[derive(Debug)]
pub struct Session<H> {
    host: H,
    config: SessionConfig,
}

impl<H: SessionHost> Session<H> {
    /// Wraps `host` with the default configuration.
    pub fn new(host: H) -> Self {
        Self::with_config(host, SessionConfig::default())
    }

    /// Wraps `host` with an explicit configuration.
    pub fn with_config(host: H, config: SessionConfig) -> Self {
        Self { host, config }
    }

    /// Starts the session if it is not already active and ensures a CSRF token exists.
    ///
    /// Calling `start` on an active session only re-checks the token. A token
    /// that is missing or falsy is regenerated.
    ///
    /// # Errors
    ///
    /// Returns the host's [`SessionError`] if the session cannot begin.
    pub fn start(&mut self) -> Result<&mut Self, SessionError> {
        if self.host.id().is_none() {
            self.host.begin()?;
        }

        if !self.has(TOKEN_KEY).is_some_and(is_truthy) {
            self.regenerate_token();
        }

        Ok(self)
    }

    /// Returns the active session identifier.
    pub fn id(&self) -> Option<&str> {
        self.host.id()
    }

    /// Requests a new session identifier, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns the host's [`SessionError`] when the identifier cannot change
    /// at this point of the request.
    pub fn set_id(&mut self, id: &str) -> Result<String, SessionError> {
        self.host.set_id(id)
    }

    /// Returns the session name.
    pub fn name(&self) -> &str {
        self.host.name()
    }

    /// Sets a value by dot path.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        array::set(self.host.attributes_mut(), key, value.into());
    }

    /// Sets every `(key, value)` pair in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use web_helpers::session::{MemoryHost, MemoryRegistry, Session};
    ///
    /// let mut session = Session::new(MemoryHost::new(MemoryRegistry::new()));
    /// session.start().unwrap();
    /// session.set_many([("a.x", json!(1)), ("b", json!("two"))]);
    ///
    /// assert_eq!(session.get("a"), Some(&json!({"x": 1})));
    /// ```
    pub fn set_many<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (key, value) in entries {
            self.set(key.as_ref(), value);
        }
    }

    /// Gets a value by dot path.
    pub fn get(&self, key: &str) -> Option<&Value> {
        array::get(self.host.attributes(), key)
    }

    /// Gets a value by dot path, or `default` when it is absent.
    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Value {
        self.get(key).cloned().unwrap_or_else(|| default.into())
    }

    /// Returns the stored value at `key`, standing in for an existence check.
    ///
    /// This returns the value itself, not a boolean. A stored `0` or `""`
    /// comes back as `Some`, and callers that only test truthiness cannot
    /// tell it apart from an absent key.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use web_helpers::session::{MemoryHost, MemoryRegistry, Session};
    ///
    /// let mut session = Session::new(MemoryHost::new(MemoryRegistry::new()));
    /// session.start().unwrap();
    /// session.set("count", 0);
    ///
    /// assert_eq!(session.has("count"), Some(&json!(0)));
    /// assert_eq!(session.has("missing"), None);
    /// ```
    pub fn has(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    /// Removes a value by dot path.
    pub fn delete(&mut self, key: &str) {
        array::forget(self.host.attributes_mut(), key);
    }

    /// Returns a copy of every session attribute.
    pub fn all(&self) -> Attributes {
        self.host.attributes().clone()
    }

    /// Appends `value` to the sequence stored at `key`.
    ///
    /// An absent or `null` key starts a new sequence. Any other non-sequence
    /// value is replaced by a new one-element sequence.
    pub fn push(&mut self, key: &str, value: impl Into<Value>) {
        let mut items = match self.get(key) {
            Some(Value::Array(items)) => items.clone(),
            None | Some(Value::Null) => Vec::new(),
            Some(_) => {
                tracing::warn!(key, "push replaced a non-sequence session value");
                Vec::new()
            }
        };

        items.push(value.into());
        self.set(key, Value::Array(items));
    }

    /// Sets `key` for this request and the next, then registers it for removal.
    pub fn flash(&mut self, key: &str, value: impl Into<Value>) {
        self.set(key, value);
        self.push(FLASH_KEY, key);
        tracing::trace!(key, "flash registered");
    }

    /// Deletes every flashed key and resets the flash registry.
    ///
    /// Call this once per request after the flashed values have been read.
    pub fn delete_flash(&mut self) {
        let flashed: Vec<String> = match self.get(FLASH_KEY) {
            Some(Value::Array(keys)) => keys
                .iter()
                .filter_map(|key| key.as_str().map(str::to_owned))
                .collect(),
            _ => Vec::new(),
        };

        for key in &flashed {
            self.delete(key);
        }
        self.set(FLASH_KEY, Value::Array(Vec::new()));

        tracing::debug!(count = flashed.len(), "flash data swept");
    }

    /// Destroys the session. Returns `false` if no session was active.
    pub fn destroy(&mut self) -> bool {
        if self.host.id().is_none() {
            return false;
        }
        self.host.destroy()
    }

    /// Clears all attributes, keeping the session active.
    ///
    /// Returns `false` if no session was active. This also removes the CSRF
    /// token until the next [`start`](Self::start).
    pub fn flush(&mut self) -> bool {
        self.host.clear()
    }

    /// Returns the stored CSRF token, if one is set and is a string.
    pub fn token(&self) -> Option<&str> {
        self.get(TOKEN_KEY).and_then(Value::as_str)
    }

    /// Replaces the CSRF token with a freshly generated one.
    pub fn regenerate_token(&mut self) {
        let fresh = token::generate(self.config.bytes_per_token());
        self.set(TOKEN_KEY, fresh);
        tracing::debug!(session = %self.host.name(), "csrf token regenerated");
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the underlying host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the underlying host for mutation.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Unwraps the facade, returning the host.
    pub fn into_host(self) -> H {
        self.host
    }
}

/// Key-indexed access in four named operations.
///
/// Each method is a thin alias over the corresponding [`Session`] operation.
/// [`Session`] also implements read-only [`Index<&str>`](Index), resolving
/// missing keys to `Value::Null`.
pub trait IndexedAccess {
    /// Reads the value at `key`.
    fn item(&self, key: &str) -> Option<&Value>;

    /// Writes `value` at `key`.
    fn set_item(&mut self, key: &str, value: Value);

    /// Returns whether the value at `key` is present and truthy.
    fn item_exists(&self, key: &str) -> bool;

    /// Removes the value at `key`.
    fn remove_item(&mut self, key: &str);
}

impl<H: SessionHost> IndexedAccess for Session<H> {
    fn item(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn set_item(&mut self, key: &str, value: Value) {
        self.set(key, value);
    }

    fn item_exists(&self, key: &str) -> bool {
        self.has(key).is_some_and(is_truthy)
    }

    fn remove_item(&mut self, key: &str) {
        self.delete(key);
    }
}

impl<H: SessionHost> Index<&str> for Session<H> {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}
