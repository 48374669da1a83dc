//! Application State Management
//!
//! Defines the application state shared by all request handlers.
//!
//! The state is the only cross-request resource: a connection pool that is
//! itself safe for concurrent use, plus immutable configuration. No locks
//! are taken in request-handling code; cross-row atomicity is delegated to
//! store transactions.

use sqlx::PgPool;
use std::sync::Arc;

use crate::server::config::ServerConfig;

/// Application state shared across all handlers.
///
/// Constructed once in [`create_app`](crate::server::init::create_app) and
/// cloned per request (both fields are cheap handles). The pool is `None`
/// when the database is not configured; handlers answer 503 in that case.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, `None` when `DATABASE_URL` is unset
    pub db_pool: Option<PgPool>,
    /// Immutable process-wide configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create application state from loaded configuration and pool.
    pub fn new(db_pool: Option<PgPool>, config: ServerConfig) -> Self {
        Self {
            db_pool,
            config: Arc::new(config),
        }
    }

    /// The pool, or the 503 every database-backed handler returns without one.
    pub fn pool(&self) -> Result<&PgPool, crate::error::ApiError> {
        self.db_pool
            .as_ref()
            .ok_or_else(crate::error::ApiError::database_not_configured)
    }
}
