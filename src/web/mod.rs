//! Request and response helpers for server-rendered pages.
//!
//! This module contains no framework-specific code. Framework glue builds a
//! [`Request`] from its own request type and turns a [`Response`] back into
//! its own response type; everything in between is plain data.
//!
//! # Example Flow
//!
//! ```
//! use web_helpers::session::{MemoryHost, MemoryRegistry, Session};
//! use web_helpers::web::{json_message, redirect_to, Request};
//! use web_helpers::csrf_filter;
//!
//! let mut session = Session::new(MemoryHost::new(MemoryRegistry::new()));
//! let mut request = Request::new("/settings");
//! request.add_form_field("_token", "forged");
//!
//! let response = if csrf_filter(&mut session, &request).expect("session starts") {
//!     redirect_to("/settings/saved", false)
//! } else {
//!     json_message(Some("Invalid token"), false)
//! };
//! assert_eq!(response.body, r#"{"message":"Invalid token","success":false}"#);
//! ```

mod form;
mod request;
mod response;

pub use form::{set_checkbox, set_radio, set_select, set_value};
pub use request::Request;
pub use response::{json_message, redirect_to, Response};
