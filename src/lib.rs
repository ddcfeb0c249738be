//! Helpers for server-rendered web applications.
//!
//! This crate collects the small pieces most page handlers end up needing:
//!
//! - **Nested attributes**: [`array`] reads, writes and removes values in a
//!   JSON-style map by dot path (`"user.address.city"`)
//! - **Sessions**: [`Session`] layers dot-path access, flash messages and a
//!   CSRF token over any [`SessionHost`]
//! - **CSRF**: [`csrf_token`], [`csrf_input`], [`csrf_meta`] and
//!   [`csrf_filter`] issue and check one-time tokens
//! - **Text**: [`strings`], [`html`] and [`codec`] for wildcard matching,
//!   case conversion, escaping and JSON-or-text values
//! - **Requests and responses**: [`web`] for URL reconstruction, redirects,
//!   JSON messages and form re-population
//!
//! Values are [`serde_json::Value`] throughout, re-exported here as [`Value`].
//!
//! # Examples
//!
//! ```
//! use web_helpers::session::{MemoryHost, MemoryRegistry, Session};
//! use web_helpers::web::Request;
//! use web_helpers::{csrf_filter, csrf_token, Value};
//!
//! let mut session = Session::new(MemoryHost::new(MemoryRegistry::new()));
//! session.start().expect("session starts");
//! session.set("user.name", "Ada");
//! assert_eq!(session.get("user.name"), Some(&Value::from("Ada")));
//!
//! // A submission carrying the wrong token is rejected, and the token rotates.
//! let before = csrf_token(&mut session).unwrap();
//! let mut request = Request::new("/profile");
//! request.add_form_field("_token", "wrong");
//!
//! assert!(!csrf_filter(&mut session, &request).unwrap());
//! assert_ne!(csrf_token(&mut session).unwrap(), before);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod array;
pub mod avatar;
pub mod codec;
mod csrf;
mod error;
pub mod html;
pub mod session;
pub mod strings;
mod token;
pub mod value;
pub mod web;

pub use array::Attributes;
pub use csrf::{csrf_filter, csrf_input, csrf_meta, csrf_token, verify_token, CsrfToken};
pub use error::{SessionError, SessionErrorKind};
pub use serde_json::Value;
pub use session::{Session, SessionHost};
