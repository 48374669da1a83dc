//! Session Token Codec
//!
//! Signs a small claim set (the user id) into an opaque bearer string and
//! verifies it back. Tokens are HS256 JWTs with a 7-day expiry, signed with
//! the process-wide secret from [`ServerConfig`](crate::server::config::ServerConfig).
//!
//! Verification never errors: a tampered, malformed, or expired token is
//! indistinguishable from "not logged in" and decodes to `None`.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Session lifetime: 7 days
pub const TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (UUID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a signed session token for a user
///
/// # Arguments
/// * `secret` - Symmetric signing secret (configuration, not user data)
/// * `user_id` - User ID to embed in the claims
///
/// # Returns
/// Signed token string, valid for 7 days
pub fn create_token(secret: &str, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };
    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify a session token and extract the user id
///
/// Both the signature and the expiry are checked; a token that is valid in
/// signature but past expiry is rejected. Any failure yields `None` rather
/// than an error, so callers treat it uniformly as "unauthenticated".
pub fn verify_token(secret: &str, token: &str) -> Option<Uuid> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let mut validation = Validation::default();
    validation.leeway = 0;

    let data = decode::<Claims>(token, &key, &validation).ok()?;
    Uuid::parse_str(&data.claims.sub).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_round_trip() {
        let user_id = Uuid::new_v4();
        let token = create_token(SECRET, user_id).unwrap();
        assert_eq!(verify_token(SECRET, &token), Some(user_id));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Valid signature, expiry in the past.
        let now = unix_now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            exp: now - 3600,
            iat: now - TOKEN_TTL_SECS,
        };
        let key = EncodingKey::from_secret(SECRET.as_ref());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        assert_eq!(verify_token(SECRET, &token), None);
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let token = create_token(SECRET, Uuid::new_v4()).unwrap();
        let (payload, signature) = token.rsplit_once('.').unwrap();

        // Flip one character of the signature segment.
        let mut sig: Vec<char> = signature.chars().collect();
        sig[0] = if sig[0] == 'A' { 'B' } else { 'A' };
        let tampered: String = sig.into_iter().collect();

        assert_eq!(verify_token(SECRET, &format!("{payload}.{tampered}")), None);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token(SECRET, Uuid::new_v4()).unwrap();
        assert_eq!(verify_token("other-secret", &token), None);
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert_eq!(verify_token(SECRET, "not.a.token"), None);
        assert_eq!(verify_token(SECRET, ""), None);
    }

    #[test]
    fn test_token_exp_after_iat() {
        let token = create_token(SECRET, Uuid::new_v4()).unwrap();
        let key = DecodingKey::from_secret(SECRET.as_ref());
        let data = decode::<Claims>(&token, &key, &Validation::default()).unwrap();
        assert_eq!(data.claims.exp - data.claims.iat, TOKEN_TTL_SECS);
    }
}
