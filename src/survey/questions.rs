//! Canonical Survey Questions
//!
//! The fixed question set used to seed the canonical intake survey on
//! first access, and the question type model.
//!
//! Question types are a tagged union at the definition level; on the wire
//! and in storage they become a string tag plus, for choice questions, a
//! comma-joined options list (split back on read). Answer values stay
//! plain strings; validating a value against the declared kind is a
//! deliberate extension point, not implemented here.

use serde::{Deserialize, Serialize};

/// Title used as the natural idempotency key for the canonical survey.
pub const SURVEY_TITLE: &str = "Intake Survey";

/// Description of the canonical survey.
pub const SURVEY_DESCRIPTION: &str =
    "Intake survey capturing demographics and health information.";

/// Delimiter for stored choice options.
pub const OPTIONS_DELIMITER: &str = ",";

/// Question type with options attached where they belong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Free text input
    Text,
    /// Numeric input (stored as its string representation)
    Number,
    /// Single choice from a fixed, ordered list of labels
    Choice(Vec<String>),
    /// Date input (stored as its string representation)
    Date,
}

impl QuestionKind {
    /// The storage/wire tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Choice(_) => "select",
            Self::Date => "date",
        }
    }

    /// The comma-joined options string, present only for choice questions.
    pub fn stored_options(&self) -> Option<String> {
        match self {
            Self::Choice(options) => Some(options.join(OPTIONS_DELIMITER)),
            _ => None,
        }
    }
}

/// Split a stored options string back into its ordered labels.
pub fn parse_options(stored: &str) -> Vec<String> {
    stored.split(OPTIONS_DELIMITER).map(str::to_owned).collect()
}

/// A question definition used to seed the canonical survey.
#[derive(Debug, Clone)]
pub struct QuestionDef {
    /// Question text shown to the respondent
    pub label: &'static str,
    /// Type of input, with options for choice questions
    pub kind: QuestionKind,
    /// Whether the client should require an answer
    pub required: bool,
}

/// The canonical intake question set, in presentation order.
pub fn canonical_questions() -> Vec<QuestionDef> {
    let choice = |options: &[&str]| {
        QuestionKind::Choice(options.iter().map(|s| (*s).to_owned()).collect())
    };

    vec![
        QuestionDef {
            label: "What is your ethnicity or racial background?",
            kind: QuestionKind::Text,
            required: true,
        },
        QuestionDef {
            label: "What is your age range?",
            kind: choice(&[
                "Under 18",
                "18-24",
                "25-34",
                "35-44",
                "45-54",
                "55-64",
                "65+",
            ]),
            required: true,
        },
        QuestionDef {
            label: "What is your weight in pounds (lbs)?",
            kind: QuestionKind::Number,
            required: true,
        },
        QuestionDef {
            label: "Do you have a history of any diagnosed illnesses or diseases? Please list below, if so.",
            kind: QuestionKind::Text,
            required: false,
        },
        QuestionDef {
            label: "Are you currently on any medication?",
            kind: choice(&["Yes", "No"]),
            required: true,
        },
        QuestionDef {
            label: "What was your annual income last year (USD $)?",
            kind: QuestionKind::Number,
            required: false,
        },
        QuestionDef {
            label: "Do you currently have any form of medical insurance?",
            kind: choice(&["Yes", "No"]),
            required: true,
        },
    ]
}
