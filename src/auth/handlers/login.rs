//! Login Handler
//!
//! Implements user authentication for POST /auth/login.
//!
//! # Security
//!
//! - Unknown email and wrong password return the same 401, so responses
//!   cannot be used to enumerate registered accounts
//! - Password verification uses bcrypt's constant-time comparison
//! - Passwords are never logged or returned in responses

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use axum_extra::extract::CookieJar;
use bcrypt::verify;

use crate::auth::cookie::session_cookie;
use crate::auth::handlers::types::{LoginRequest, UserResponse};
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing or empty email/password
/// * `401 Unauthorized` - unknown email or wrong password (same message)
/// * `503 Service Unavailable` - database not configured or unreachable
/// * `500 Internal Server Error` - verification or token issuance failed
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<UserResponse>), ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Malformed login payload: {}", e);
        ApiError::validation("Email and password required")
    })?;

    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Email and password required"));
    }

    let pool = state.pool()?;
    tracing::info!("Login request for email: {}", request.email);

    let user = get_user_by_email(pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed for {}", request.email);
            ApiError::unauthorized("Invalid credentials")
        })?;

    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::internal("Login failed")
    })?;

    if !valid {
        tracing::warn!("Login failed for {}", request.email);
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = create_token(&state.config.jwt_secret, user.id).map_err(|e| {
        tracing::error!("Failed to create session token: {:?}", e);
        ApiError::internal("Login failed")
    })?;

    tracing::info!("User logged in: {}", user.email);

    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    Ok((jar, Json(UserResponse::from(user))))
}
