//! Authentication Module
//!
//! User registration, credential verification, and cookie-based session
//! management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports and documentation
//! ├── users.rs    - User model and database operations
//! ├── sessions.rs - Session token codec (JWT sign/verify)
//! ├── cookie.rs   - Session cookie lifecycle
//! └── handlers/   - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email + password -> user created -> session cookie set
//! 2. **Login**: credentials verified -> session cookie set
//! 3. **Status**: cookie verified -> `{authenticated, userId?}`
//! 4. **Logout**: session cookie cleared (no server-side state)
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never exposed
//! - Session tokens are stateless signed JWTs, 7-day expiry, carried in an
//!   HttpOnly SameSite=Lax cookie
//! - Invalid credentials return a uniform 401 (no account enumeration)

/// User data model and database operations
pub mod users;

/// Session token generation and validation
pub mod sessions;

/// Session cookie lifecycle
pub mod cookie;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, SignupRequest, StatusResponse, UserResponse};
pub use handlers::{login, logout, signup, status};
