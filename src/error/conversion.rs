//! Error Conversion
//!
//! Converts `ApiError` values into HTTP responses so handlers can return
//! them directly with `?`.
//!
//! # Response Format
//!
//! ```json
//! {
//!   "error": "Invalid credentials",
//!   "code": "authentication_error",
//!   "status": 401
//! }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.message(),
            "code": self.code(),
            "status": status.as_u16(),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_response_status() {
        let response = ApiError::conflict("User already exists").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_into_response_is_json() {
        let response = ApiError::unauthorized("Unauthorized").into_response();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("application/json"));
    }
}
