//! Survey Catalog
//!
//! Idempotent get-or-create for the canonical survey, keyed by its unique
//! title. The first access creates the survey together with its question
//! rows in one transaction; concurrent first accesses are resolved by the
//! unique constraint on `surveys.title` - the loser's insert affects no
//! rows and it falls back to re-reading the winner's survey, so two
//! divergent "canonical" surveys can never exist.

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::survey::questions::{
    canonical_questions, parse_options, SURVEY_DESCRIPTION, SURVEY_TITLE,
};

/// Survey row as stored.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SurveyRow {
    /// Survey ID
    pub id: Uuid,
    /// Unique title (idempotency key)
    pub title: String,
    /// Human-readable description
    pub description: String,
}

/// Question row as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct QuestionRow {
    /// Question ID
    pub id: Uuid,
    /// Owning survey
    pub survey_id: Uuid,
    /// Question text
    pub label: String,
    /// Wire tag: text / number / select / date
    pub question_type: String,
    /// Whether the client should require an answer
    pub required: bool,
    /// Comma-joined options, present only for select questions
    pub options: Option<String>,
    /// Presentation order within the survey
    pub position: i32,
}

/// Question as served to clients, options deserialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    /// Question ID
    pub id: Uuid,
    /// Question text
    pub label: String,
    /// Wire tag: text / number / select / date
    #[serde(rename = "type")]
    pub question_type: String,
    /// Whether the client should require an answer
    pub required: bool,
    /// Ordered option labels for select questions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl From<QuestionRow> for QuestionView {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            label: row.label,
            question_type: row.question_type,
            required: row.required,
            options: row.options.as_deref().map(parse_options),
        }
    }
}

/// Survey with its questions in stored order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyView {
    /// Survey ID
    pub id: Uuid,
    /// Survey title
    pub title: String,
    /// Survey description
    pub description: String,
    /// Questions in presentation order
    pub questions: Vec<QuestionView>,
}

/// Look up the canonical survey with its questions, if it exists.
async fn fetch_canonical(pool: &PgPool) -> Result<Option<SurveyView>, sqlx::Error> {
    let survey = sqlx::query_as::<_, SurveyRow>(
        r#"
        SELECT id, title, description
        FROM surveys
        WHERE title = $1
        "#,
    )
    .bind(SURVEY_TITLE)
    .fetch_optional(pool)
    .await?;

    let Some(survey) = survey else {
        return Ok(None);
    };

    let questions = sqlx::query_as::<_, QuestionRow>(
        r#"
        SELECT id, survey_id, label, question_type, required, options, position
        FROM questions
        WHERE survey_id = $1
        ORDER BY position
        "#,
    )
    .bind(survey.id)
    .fetch_all(pool)
    .await?;

    Ok(Some(SurveyView {
        id: survey.id,
        title: survey.title,
        description: survey.description,
        questions: questions.into_iter().map(QuestionView::from).collect(),
    }))
}

/// Create the canonical survey and its questions in one transaction.
///
/// Returns `None` when a concurrent creator won the race on the title's
/// unique constraint; nothing is persisted in that case.
async fn try_create_canonical(pool: &PgPool) -> Result<Option<Uuid>, sqlx::Error> {
    let mut tx: Transaction<'_, Postgres> = pool.begin().await?;

    let survey_id: Option<Uuid> = sqlx::query_scalar(
        r#"
        INSERT INTO surveys (id, title, description)
        VALUES ($1, $2, $3)
        ON CONFLICT (title) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(SURVEY_TITLE)
    .bind(SURVEY_DESCRIPTION)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(survey_id) = survey_id else {
        // Lost the race; the insert affected no rows.
        tx.rollback().await?;
        return Ok(None);
    };

    for (position, def) in canonical_questions().iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO questions (id, survey_id, label, question_type, required, options, position)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(survey_id)
        .bind(def.label)
        .bind(def.kind.tag())
        .bind(def.required)
        .bind(def.kind.stored_options())
        .bind(position as i32)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!("Canonical survey created: {}", SURVEY_TITLE);
    Ok(Some(survey_id))
}

/// Get the canonical survey, creating it on first access.
///
/// Safe under concurrent first access: either this caller creates the
/// survey, or it observes the concurrent winner's row on re-lookup.
pub async fn get_or_create(pool: &PgPool) -> Result<SurveyView, sqlx::Error> {
    // A couple of lookup/create rounds cover the window where the winner's
    // transaction has not committed yet.
    for _ in 0..3 {
        if let Some(view) = fetch_canonical(pool).await? {
            return Ok(view);
        }
        if try_create_canonical(pool).await?.is_some() {
            if let Some(view) = fetch_canonical(pool).await? {
                return Ok(view);
            }
        }
    }

    tracing::error!("Canonical survey unavailable after create/lookup retries");
    Err(sqlx::Error::RowNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_view_parses_options() {
        let row = QuestionRow {
            id: Uuid::new_v4(),
            survey_id: Uuid::new_v4(),
            label: "Are you currently on any medication?".to_string(),
            question_type: "select".to_string(),
            required: true,
            options: Some("Yes,No".to_string()),
            position: 4,
        };
        let view = QuestionView::from(row);
        assert_eq!(view.options, Some(vec!["Yes".to_string(), "No".to_string()]));
    }

    #[test]
    fn test_question_view_serializes_type_tag() {
        let view = QuestionView {
            id: Uuid::new_v4(),
            label: "What is your age range?".to_string(),
            question_type: "select".to_string(),
            required: true,
            options: Some(vec!["Under 18".to_string()]),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["type"], "select");
    }

    #[test]
    fn test_text_question_omits_options() {
        let view = QuestionView {
            id: Uuid::new_v4(),
            label: "What is your ethnicity or racial background?".to_string(),
            question_type: "text".to_string(),
            required: true,
            options: None,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("options").is_none());
    }
}
