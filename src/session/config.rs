/// Smallest token size accepted, in random bytes.
const MIN_TOKEN_BYTES: usize = 8;

/// Tunables for a [`Session`](super::Session).
///
/// # Examples
///
/// ```
/// use web_helpers::session::SessionConfig;
///
/// let config = SessionConfig::new().token_bytes(32);
/// assert_eq!(config.token_len(), 64);
///
/// // Too-small sizes are raised to the minimum.
/// assert_eq!(SessionConfig::new().token_bytes(1).token_len(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    token_bytes: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { token_bytes: 16 }
    }
}

impl SessionConfig {
    /// Creates the default configuration: 16-byte (32 hex character) CSRF tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many random bytes back each CSRF token.
    pub fn token_bytes(mut self, bytes: usize) -> Self {
        self.token_bytes = bytes.max(MIN_TOKEN_BYTES);
        self
    }

    /// Returns the random byte count per token.
    pub fn bytes_per_token(&self) -> usize {
        self.token_bytes
    }

    /// Returns the length of a generated token in characters.
    pub fn token_len(&self) -> usize {
        self.token_bytes * 2
    }
}
