//! Session facade: dot-path attributes, flash messages and CSRF tokens.
//!
//! The facade never reaches for ambient global state. Framework glue owns a
//! [`SessionHost`] for the current request and hands it to [`Session`]; every
//! operation runs synchronously against that host.
//!
//! # Lifecycle
//!
//! ```text
//! Unstarted --start--> Started --destroy--> (no active session)
//!                         |
//!                       flush (clears attributes, stays Started)
//! ```
//!
//! # Flash messages
//!
//! [`Session::flash`] stores a value and records its key under
//! [`FLASH_KEY`]. The value survives until [`Session::delete_flash`] runs,
//! normally once at the start of the next request after it has been read.

mod config;
mod host;
mod memory;
mod store;

pub use config::SessionConfig;
pub use host::SessionHost;
pub use memory::{MemoryHost, MemoryRegistry, DEFAULT_SESSION_NAME};
pub use store::{IndexedAccess, Session, FLASH_KEY, TOKEN_KEY};
