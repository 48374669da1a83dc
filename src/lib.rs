//! Intake survey service
//!
//! A small web application that collects survey responses from
//! authenticated users: signup/login with bcrypt-hashed credentials,
//! stateless JWT sessions carried in an HttpOnly cookie, an idempotent
//! canonical survey catalog, atomic response submission, and per-user
//! response history, backed by PostgreSQL.
//!
//! # Architecture
//!
//! - **`auth`** - credentials, session token codec, cookie lifecycle,
//!   auth endpoint handlers
//! - **`survey`** - canonical survey catalog (get-or-create by title)
//! - **`responses`** - atomic submission recorder and history reads
//! - **`middleware`** - page auth gate and the `CurrentUser` extractor
//! - **`error`** - error taxonomy mapped to HTTP responses
//! - **`routes`** - router assembly
//! - **`server`** - configuration, state, schema self-heal, app setup

/// Authentication and user management
pub mod auth;

/// API error taxonomy
pub mod error;

/// Request guards
pub mod middleware;

/// Submission recording and history
pub mod responses;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// Survey catalog
pub mod survey;

pub use error::ApiError;
pub use server::{create_app, create_app_with_state, AppState, ServerConfig};
