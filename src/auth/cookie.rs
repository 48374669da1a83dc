//! Session Cookie Manager
//!
//! Binds the session token codec to the HTTP cookie lifecycle. The token
//! travels in a cookie named `token` that page scripts cannot read
//! (HttpOnly) and that browsers only send on same-site-lax navigation.
//! Logout overwrites the cookie with an empty value and zero max-age.

use axum_extra::extract::cookie::{Cookie, SameSite};
use cookie::time::Duration;

use crate::auth::sessions::TOKEN_TTL_SECS;

/// Name of the session cookie
pub const TOKEN_COOKIE: &str = "token";

/// Build the session cookie carrying a freshly issued token.
///
/// Attributes: HttpOnly, Path=/, SameSite=Lax, Max-Age 7 days, and Secure
/// when the server is configured for TLS.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(TOKEN_TTL_SECS as i64))
        .build()
}

/// Build the cookie that clears the session.
///
/// An empty value with Max-Age 0 makes the client discard the cookie
/// immediately. There is no server-side session state to clear.
pub fn expired_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, ""))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .build()
}
