//! Survey Module
//!
//! The survey catalog: canonical question definitions and the idempotent
//! get-or-create operation keyed by survey title.
//!
//! ```text
//! survey/
//! ├── mod.rs       - Module exports
//! ├── questions.rs - Canonical question set and type model
//! ├── catalog.rs   - Get-or-create and read views
//! └── handlers.rs  - GET /survey
//! ```

/// Canonical question definitions and type model
pub mod questions;

/// Survey get-or-create and read views
pub mod catalog;

/// HTTP handler for the survey endpoint
pub mod handlers;

pub use catalog::{QuestionView, SurveyView};
pub use handlers::get_survey;
pub use questions::{QuestionKind, SURVEY_TITLE};
