//! API Route Handlers
//!
//! Wires the JSON API endpoints:
//!
//! ## Authentication
//! - `POST /auth/signup` - user registration (public)
//! - `POST /auth/login` - user login (public)
//! - `GET  /auth/status` - session status (cookie optional)
//! - `POST /auth/logout` - clear the session cookie (public)
//!
//! ## Survey
//! - `GET  /survey` - canonical survey with questions (session required)
//! - `POST /survey/submit` - record a response (session required)
//!
//! ## Responses
//! - `GET  /responses/me` - the caller's response history (session required)
//!
//! ## Health
//! - `GET  /health/db` - database connectivity probe (public)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};

use crate::auth::{login, logout, signup, status};
use crate::error::ApiError;
use crate::responses::{list_mine, submit};
use crate::server::state::AppState;
use crate::survey::get_survey;

/// Configure the API routes.
///
/// Protected routes do not rely on any outer gate; each re-verifies the
/// session via the `CurrentUser` extractor.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/status", get(status))
        .route("/auth/logout", post(logout))
        .route("/survey", get(get_survey))
        .route("/survey/submit", post(submit))
        .route("/responses/me", get(list_mine))
        .route("/health/db", get(db_health))
}

/// Database health probe.
///
/// Reports a missing pool as 503 without touching the store; otherwise
/// runs a minimal count query to verify connectivity and schema.
async fn db_health(State(state): State<AppState>) -> Response {
    let Some(pool) = &state.db_pool else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "ok": false,
                "code": "missing_database_url",
                "error": "No Postgres DATABASE_URL configured",
            })),
        )
            .into_response();
    };

    match sqlx::query_scalar::<_, i64>("SELECT count(*) FROM users")
        .fetch_one(pool)
        .await
    {
        Ok(count) => Json(serde_json::json!({ "ok": true, "userCount": count })).into_response(),
        Err(e) => {
            let err = ApiError::from(e);
            (
                err.status_code(),
                Json(serde_json::json!({
                    "ok": false,
                    "code": err.code(),
                    "error": err.message(),
                })),
            )
                .into_response()
        }
    }
}
