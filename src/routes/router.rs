//! Router Configuration
//!
//! Assembles the complete application router:
//!
//! 1. API routes (JSON endpoints; each protected route re-verifies the
//!    session itself)
//! 2. Static pages from `public/`, wrapped in the page auth gate so
//!    protected page prefixes redirect unauthenticated navigation to the
//!    login page
//!
//! The gate layers only the page fallback. API paths are matched by the
//! API router first and answer 401 JSON, never a redirect.

use axum::{middleware, Router};
use tower_http::services::ServeDir;

use crate::middleware::page_auth_gate;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the application router with all routes configured.
pub fn create_router(app_state: AppState) -> Router<()> {
    let api = configure_api_routes(Router::new());

    let pages = Router::new()
        .fallback_service(ServeDir::new("public"))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            page_auth_gate,
        ));

    api.merge(pages).with_state(app_state)
}
