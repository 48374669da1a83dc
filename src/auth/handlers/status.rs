//! Session Status Handler
//!
//! GET /auth/status reports whether the incoming cookie carries a valid
//! session. It never errors to the caller: verification failure is
//! reported as `{"authenticated": false}`, exactly like a missing cookie.

use axum::{extract::State, response::Json};
use axum_extra::extract::CookieJar;

use crate::auth::cookie::TOKEN_COOKIE;
use crate::auth::handlers::types::StatusResponse;
use crate::auth::sessions::verify_token;
use crate::server::state::AppState;

/// Session status handler
pub async fn status(State(state): State<AppState>, jar: CookieJar) -> Json<StatusResponse> {
    let user_id = jar
        .get(TOKEN_COOKIE)
        .and_then(|c| verify_token(&state.config.jwt_secret, c.value()));

    Json(StatusResponse {
        authenticated: user_id.is_some(),
        user_id,
    })
}
