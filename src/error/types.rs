//! API Error Types
//!
//! This module defines the error taxonomy used by all HTTP handlers.
//! Each variant maps to a fixed status code and a stable machine-readable
//! code, so clients never see raw store errors or internal detail.
//!
//! # Error Categories
//!
//! - `Validation` - malformed or missing request fields (400)
//! - `Authentication` - bad credentials or missing/invalid session (401)
//! - `Conflict` - duplicate email on signup (409)
//! - `Unavailable` - database unreachable or not configured (503)
//! - `Internal` - anything else, including unexpected store errors (500)

use axum::http::StatusCode;
use thiserror::Error;

/// Error type returned by every API handler.
///
/// Each variant carries a human-readable message that is safe to surface
/// to the client. Internal causes (connection strings, SQL detail) are
/// logged at the point of failure, never returned.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing request fields
    #[error("{message}")]
    Validation {
        /// Client-safe description of what was wrong with the request
        message: String,
    },

    /// Bad credentials or missing/invalid session
    #[error("{message}")]
    Authentication {
        /// Deliberately ambiguous message (no account enumeration)
        message: String,
    },

    /// Duplicate resource, currently only a taken email on signup
    #[error("{message}")]
    Conflict {
        /// Client-safe description of the conflict
        message: String,
    },

    /// Persistence store unreachable or not configured
    #[error("{message}")]
    Unavailable {
        /// Client-safe description of the outage
        message: String,
    },

    /// Unexpected failure; the message is always generic
    #[error("{message}")]
    Internal {
        /// Generic message, never the underlying cause
        message: String,
    },
}

impl ApiError {
    /// Create a validation error (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an authentication error (401)
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a conflict error (409)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an unavailable error (503)
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create an internal error (500)
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The 503 returned when a handler needs the database and none is configured
    pub fn database_not_configured() -> Self {
        Self::unavailable("Database not configured")
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Authentication { .. } => StatusCode::UNAUTHORIZED,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::Authentication { .. } => "authentication_error",
            Self::Conflict { .. } => "conflict_error",
            Self::Unavailable { .. } => "unavailable_error",
            Self::Internal { .. } => "internal_error",
        }
    }

    /// Get the client-safe error message
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Authentication { message }
            | Self::Conflict { message }
            | Self::Unavailable { message }
            | Self::Internal { message } => message,
        }
    }
}

/// Map store-layer failures to the taxonomy.
///
/// Connectivity problems become 503; everything else is a generic 500.
/// Unique-constraint violations are handled at the call sites that can
/// name the conflicting resource, not here.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                tracing::error!("Database unreachable: {:?}", err);
                Self::unavailable("Database unreachable")
            }
            sqlx::Error::Database(db) if db.code().as_deref() == Some("42P01") => {
                // Undefined table: schema was never applied to this database.
                tracing::error!("Database schema missing tables: {:?}", err);
                Self::internal("Database schema missing tables")
            }
            _ => {
                tracing::error!("Database error: {:?}", err);
                Self::internal("Internal server error")
            }
        }
    }
}
