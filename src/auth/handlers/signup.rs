//! Signup Handler
//!
//! Implements user registration for POST /auth/signup.
//!
//! # Registration Process
//!
//! 1. Validate that email and password are present
//! 2. Reject if a user with that email already exists
//! 3. Hash the password with bcrypt
//! 4. Create the user
//! 5. Issue a session token and set the session cookie
//! 6. Return the public user projection
//!
//! # Security
//!
//! - Passwords are hashed with a per-password random salt at `DEFAULT_COST`
//! - The password hash is never returned in responses
//! - The insert race on a duplicate email maps to the same 409 as the
//!   pre-check, via the unique constraint on `users.email`

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use axum_extra::extract::CookieJar;
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::cookie::session_cookie;
use crate::auth::handlers::types::{SignupRequest, UserResponse};
use crate::auth::sessions::create_token;
use crate::auth::users::{create_user, get_user_by_email, is_unique_violation};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - missing or empty email/password
/// * `409 Conflict` - a user with this email already exists
/// * `503 Service Unavailable` - database not configured or unreachable
/// * `500 Internal Server Error` - hashing, insert, or token issuance failed
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<UserResponse>), ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Malformed signup payload: {}", e);
        ApiError::validation("Email and password required")
    })?;

    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Email and password required"));
    }

    let pool = state.pool()?;
    tracing::info!("Signup request for email: {}", request.email);

    if get_user_by_email(pool, &request.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(ApiError::conflict("User already exists"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::internal("Signup failed")
    })?;

    let user = create_user(pool, request.email, password_hash, request.name)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                // Lost the race against a concurrent signup for the same email.
                ApiError::conflict("User already exists")
            } else {
                ApiError::from(e)
            }
        })?;

    let token = create_token(&state.config.jwt_secret, user.id).map_err(|e| {
        tracing::error!("Failed to create session token: {:?}", e);
        ApiError::internal("Signup failed")
    })?;

    tracing::info!("User created: {}", user.email);

    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    Ok((jar, Json(UserResponse::from(user))))
}
