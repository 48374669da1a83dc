//! Middleware Module
//!
//! Request guards: the page auth gate and the `CurrentUser` extractor.

/// Authentication middleware and extractor
pub mod auth;

pub use auth::{page_auth_gate, CurrentUser};
