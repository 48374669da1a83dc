//! Server Module
//!
//! Server setup: configuration, application state, schema self-heal, and
//! application assembly.
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration and pool loading
//! ├── schema.rs - Advisory-locked runtime schema self-heal
//! ├── state.rs  - Application state
//! └── init.rs   - create_app
//! ```

/// Environment configuration and database loading
pub mod config;

/// Runtime schema self-heal
pub mod schema;

/// Application state
pub mod state;

/// Application assembly
pub mod init;

pub use config::ServerConfig;
pub use init::{create_app, create_app_with_state};
pub use state::AppState;
