//! HTTP handlers for authentication endpoints
//!
//! ```text
//! handlers/
//! ├── mod.rs    - Handler exports
//! ├── types.rs  - Request/response types
//! ├── signup.rs - POST /auth/signup
//! ├── login.rs  - POST /auth/login
//! ├── status.rs - GET  /auth/status
//! └── logout.rs - POST /auth/logout
//! ```

/// Request/response types
pub mod types;

/// User registration handler
pub mod signup;

/// User authentication handler
pub mod login;

/// Session status handler
pub mod status;

/// Logout handler
pub mod logout;

pub use login::login;
pub use logout::logout;
pub use signup::signup;
pub use status::status;
