//! Logout Handler
//!
//! POST /auth/logout overwrites the session cookie with an empty value and
//! zero max-age. There is no server-side session registry, so logout is
//! entirely cookie-local; an already-issued token stays valid until its
//! expiry.

use axum::response::Json;
use axum_extra::extract::CookieJar;

use crate::auth::cookie::expired_cookie;

/// Logout handler. Always succeeds.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<serde_json::Value>) {
    let jar = jar.add(expired_cookie());
    (jar, Json(serde_json::json!({ "ok": true })))
}
