//! Response History
//!
//! Read side of the submission subsystem: a user's own past responses,
//! newest first, each expanded with its answers (each answer with its
//! parent question) and the survey it belongs to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::survey::catalog::{QuestionView, SurveyRow};

#[derive(Debug, sqlx::FromRow)]
struct ResponseRow {
    id: Uuid,
    user_id: Uuid,
    survey_id: Uuid,
    created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct AnswerJoinRow {
    id: Uuid,
    response_id: Uuid,
    question_id: Uuid,
    value: String,
    label: String,
    question_type: String,
    required: bool,
    options: Option<String>,
}

/// Answer with its parent question, as served to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerView {
    /// Answer ID
    pub id: Uuid,
    /// The question this answer refers to
    pub question_id: Uuid,
    /// Stored string value
    pub value: String,
    /// The parent question
    pub question: QuestionView,
}

/// One past response with answers and parent survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseView {
    /// Response ID
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Answered survey
    pub survey_id: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// The answers recorded with this response
    pub answers: Vec<AnswerView>,
    /// The parent survey
    pub survey: SurveyRow,
}

/// List a user's responses, most recent first.
///
/// A user with no responses gets an empty list, not an error.
pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<ResponseView>, sqlx::Error> {
    let responses = sqlx::query_as::<_, ResponseRow>(
        r#"
        SELECT id, user_id, survey_id, created_at
        FROM responses
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    if responses.is_empty() {
        return Ok(Vec::new());
    }

    let response_ids: Vec<Uuid> = responses.iter().map(|r| r.id).collect();
    let survey_ids: Vec<Uuid> = responses.iter().map(|r| r.survey_id).collect();

    let answer_rows = sqlx::query_as::<_, AnswerJoinRow>(
        r#"
        SELECT a.id, a.response_id, a.question_id, a.value,
               q.label, q.question_type, q.required, q.options
        FROM answers a
        JOIN questions q ON q.id = a.question_id
        WHERE a.response_id = ANY($1)
        ORDER BY q.position
        "#,
    )
    .bind(&response_ids)
    .fetch_all(pool)
    .await?;

    let surveys = sqlx::query_as::<_, SurveyRow>(
        r#"
        SELECT id, title, description
        FROM surveys
        WHERE id = ANY($1)
        "#,
    )
    .bind(&survey_ids)
    .fetch_all(pool)
    .await?;

    let surveys: HashMap<Uuid, SurveyRow> = surveys.into_iter().map(|s| (s.id, s)).collect();

    let mut answers_by_response: HashMap<Uuid, Vec<AnswerView>> = HashMap::new();
    for row in answer_rows {
        let view = AnswerView {
            id: row.id,
            question_id: row.question_id,
            value: row.value,
            question: QuestionView {
                id: row.question_id,
                label: row.label,
                question_type: row.question_type,
                required: row.required,
                options: row
                    .options
                    .as_deref()
                    .map(crate::survey::questions::parse_options),
            },
        };
        answers_by_response.entry(row.response_id).or_default().push(view);
    }

    let views = responses
        .into_iter()
        .filter_map(|r| {
            let survey = surveys.get(&r.survey_id).cloned()?;
            Some(ResponseView {
                id: r.id,
                user_id: r.user_id,
                survey_id: r.survey_id,
                created_at: r.created_at,
                answers: answers_by_response.remove(&r.id).unwrap_or_default(),
                survey,
            })
        })
        .collect();

    Ok(views)
}
