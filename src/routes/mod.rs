//! Route Configuration Module
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── router.rs     - Router assembly (API + gated static pages)
//! └── api_routes.rs - API endpoint wiring and health probe
//! ```

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

pub use router::create_router;
