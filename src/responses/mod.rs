//! Responses Module
//!
//! The survey-submission subsystem: atomic recording of a response with
//! its answers, and retrieval of a user's own submission history.
//!
//! ```text
//! responses/
//! ├── mod.rs      - Module exports
//! ├── recorder.rs - Atomic response + answers persistence
//! ├── history.rs  - Per-user history reads
//! └── handlers.rs - POST /survey/submit, GET /responses/me
//! ```

/// Atomic response persistence
pub mod recorder;

/// Per-user response history
pub mod history;

/// HTTP handlers for submission and history
pub mod handlers;

pub use handlers::{list_mine, submit};
pub use history::{AnswerView, ResponseView};
pub use recorder::{AnswerInput, SubmitRequest};
