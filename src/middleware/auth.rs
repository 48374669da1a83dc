//! Authentication Middleware
//!
//! Two guards built on the session token codec:
//!
//! - [`page_auth_gate`] protects configured page path prefixes, redirecting
//!   unauthenticated navigation to the login page with the original path in
//!   a `redirect` query parameter.
//! - [`CurrentUser`] is the extractor API handlers take to require a valid
//!   session. It re-verifies the cookie on every call and rejects with 401
//!   before the handler body runs, so unauthenticated requests never touch
//!   the database.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::auth::cookie::TOKEN_COOKIE;
use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Page path prefixes that require a session.
pub const PROTECTED_PREFIXES: &[&str] = &["/responses"];

/// Whether a request path falls under a protected prefix.
pub fn is_protected_path(path: &str) -> bool {
    PROTECTED_PREFIXES.iter().any(|p| path.starts_with(p))
}

/// Read and verify the session cookie from a cookie jar.
fn session_user_id(jar: &CookieJar, secret: &str) -> Option<Uuid> {
    let token = jar.get(TOKEN_COOKIE)?.value();
    verify_token(secret, token)
}

/// Authenticated user extracted from the session cookie.
///
/// Handlers that require a session take this as a parameter; extraction
/// failing means the response is 401 and the handler never runs.
#[derive(Clone, Copy, Debug)]
pub struct CurrentUser {
    /// Verified user id from the token claims
    pub user_id: Uuid,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let user_id = session_user_id(&jar, &state.config.jwt_secret).ok_or_else(|| {
            tracing::warn!("Rejecting request without valid session cookie");
            ApiError::unauthorized("Unauthorized")
        })?;

        Ok(Self { user_id })
    }
}

/// Auth gate for protected pages.
///
/// A pure function of (request path, cookie): either the request passes
/// through unchanged or it is redirected to the login entry point with the
/// originally requested path preserved for post-login redirect. Applied
/// only to the page fallback, never to API routes (those answer 401 via
/// [`CurrentUser`]).
pub async fn page_auth_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    if !is_protected_path(&path) {
        return next.run(request).await;
    }

    let jar = CookieJar::from_headers(request.headers());
    if session_user_id(&jar, &state.config.jwt_secret).is_none() {
        tracing::debug!("Redirecting unauthenticated access to {} to login", path);
        return Redirect::temporary(&format!("/login?redirect={path}")).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions::create_token;
    use axum_extra::extract::cookie::Cookie;

    #[test]
    fn test_protected_path_matching() {
        assert!(is_protected_path("/responses"));
        assert!(is_protected_path("/responses/history"));
        assert!(!is_protected_path("/login"));
        assert!(!is_protected_path("/"));
        assert!(!is_protected_path("/survey"));
    }

    #[test]
    fn test_session_user_id_round_trip() {
        let user_id = Uuid::new_v4();
        let token = create_token("secret", user_id).unwrap();
        let jar = CookieJar::new().add(Cookie::new(TOKEN_COOKIE, token));
        assert_eq!(session_user_id(&jar, "secret"), Some(user_id));
    }

    #[test]
    fn test_session_user_id_missing_cookie() {
        let jar = CookieJar::new();
        assert_eq!(session_user_id(&jar, "secret"), None);
    }

    #[test]
    fn test_session_user_id_bad_token() {
        let jar = CookieJar::new().add(Cookie::new(TOKEN_COOKIE, "garbage"));
        assert_eq!(session_user_id(&jar, "secret"), None);
    }
}
