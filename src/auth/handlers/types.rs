//! Authentication Handler Types
//!
//! Request and response types shared by the signup, login, and status
//! handlers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::users::User;

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage)
    pub password: String,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Public user projection (never includes the password hash)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: Uuid,
    /// User's email address
    pub email: String,
    /// Optional display name
    pub name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

/// Session status report for `GET /auth/status`
///
/// Used by client pages to toggle UI; not a security boundary itself.
#[derive(Serialize, Deserialize, Debug)]
pub struct StatusResponse {
    /// Whether the incoming cookie carried a valid, unexpired session
    pub authenticated: bool,
    /// The session's user id, present only when authenticated
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_user_response_drops_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            password_hash: "$2b$10$secret".to_string(),
            name: Some("A".to_string()),
            created_at: Utc::now(),
        };
        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_status_response_omits_user_id_when_absent() {
        let status = StatusResponse {
            authenticated: false,
            user_id: None,
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json, serde_json::json!({ "authenticated": false }));
    }
}
