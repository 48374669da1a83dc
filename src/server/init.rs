//! Server Initialization
//!
//! Builds the axum application: configuration, optional database pool,
//! application state, router.

use axum::Router;

use crate::routes::create_router;
use crate::server::config::{load_database, ServerConfig};
use crate::server::state::AppState;

/// Create and configure the axum application.
///
/// The database is optional: without `DATABASE_URL` the server still
/// serves pages and answers database-backed API requests with 503.
pub async fn create_app(config: ServerConfig) -> Router<()> {
    tracing::info!("Initializing intake survey server");

    let db_pool = load_database().await;
    let app_state = AppState::new(db_pool, config);

    create_router(app_state)
}

/// Create the application with an already-constructed state.
///
/// Used by tests to inject a known configuration and pool.
pub fn create_app_with_state(app_state: AppState) -> Router<()> {
    create_router(app_state)
}
