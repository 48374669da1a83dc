//! Response Recorder
//!
//! Validates and atomically persists a full submission: one response row
//! plus one answer row per submitted pair, in a single transaction. If any
//! answer insert fails the response does not persist either - no orphaned
//! responses, no partial answer sets.
//!
//! Submitted question ids must belong to the submitted survey; partial
//! answer sets (required questions left unanswered) are accepted, matching
//! the client-driven completeness model.

use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;
use std::collections::HashSet;
use uuid::Uuid;

use crate::error::ApiError;

/// One submitted answer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerInput {
    /// The question this answer refers to
    pub question_id: Uuid,
    /// Raw value; coerced to its string representation on persist
    #[serde(default)]
    pub value: Option<Value>,
}

/// Submission payload for POST /survey/submit.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    /// The survey being answered
    pub survey_id: Option<Uuid>,
    /// The answers, one per question answered
    pub answers: Option<Vec<AnswerInput>>,
}

/// Coerce a raw JSON value to the canonical stored string.
///
/// Absent and null become the empty string; strings pass through; numbers
/// and booleans use their display form; anything else falls back to its
/// JSON text. Type validation against the question's declared kind is a
/// documented extension point, not performed here.
pub fn coerce_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Persist one response with its answers as a single atomic unit.
///
/// # Errors
///
/// * validation error when a submitted question id does not belong to the
///   survey
/// * mapped store errors for connectivity or unexpected failures; on any
///   failure the transaction rolls back and nothing persists
pub async fn record_response(
    pool: &PgPool,
    user_id: Uuid,
    survey_id: Uuid,
    answers: &[AnswerInput],
) -> Result<Uuid, ApiError> {
    let mut tx = pool.begin().await.map_err(ApiError::from)?;

    // Answers may only reference questions of the submitted survey.
    let known: Vec<Uuid> = sqlx::query_scalar(
        r#"
        SELECT id FROM questions WHERE survey_id = $1
        "#,
    )
    .bind(survey_id)
    .fetch_all(&mut *tx)
    .await
    .map_err(ApiError::from)?;
    let known: HashSet<Uuid> = known.into_iter().collect();

    for answer in answers {
        if !known.contains(&answer.question_id) {
            tracing::warn!(
                "Rejecting answer for question {} outside survey {}",
                answer.question_id,
                survey_id
            );
            return Err(ApiError::validation("Invalid payload"));
        }
    }

    let response_id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO responses (id, user_id, survey_id, created_at)
        VALUES ($1, $2, $3, now())
        "#,
    )
    .bind(response_id)
    .bind(user_id)
    .bind(survey_id)
    .execute(&mut *tx)
    .await
    .map_err(ApiError::from)?;

    for answer in answers {
        sqlx::query(
            r#"
            INSERT INTO answers (id, response_id, question_id, value)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(response_id)
        .bind(answer.question_id)
        .bind(coerce_value(answer.value.as_ref()))
        .execute(&mut *tx)
        .await
        .map_err(ApiError::from)?;
    }

    tx.commit().await.map_err(ApiError::from)?;
    tracing::info!("Response {} recorded for user {}", response_id, user_id);
    Ok(response_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_coerce_absent_and_null_to_empty() {
        assert_eq!(coerce_value(None), "");
        assert_eq!(coerce_value(Some(&Value::Null)), "");
    }

    #[test]
    fn test_coerce_string_passthrough() {
        let v = Value::String("25-34".to_string());
        assert_eq!(coerce_value(Some(&v)), "25-34");
    }

    #[test]
    fn test_coerce_number_and_bool() {
        assert_eq!(coerce_value(Some(&serde_json::json!(180))), "180");
        assert_eq!(coerce_value(Some(&serde_json::json!(72.5))), "72.5");
        assert_eq!(coerce_value(Some(&serde_json::json!(true))), "true");
    }

    #[test]
    fn test_submit_request_field_names() {
        let payload = serde_json::json!({
            "surveyId": Uuid::new_v4(),
            "answers": [{ "questionId": Uuid::new_v4(), "value": "A" }]
        });
        let request: SubmitRequest = serde_json::from_value(payload).unwrap();
        assert!(request.survey_id.is_some());
        assert_eq!(request.answers.unwrap().len(), 1);
    }

    #[test]
    fn test_submit_request_tolerates_missing_fields() {
        let request: SubmitRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(request.survey_id.is_none());
        assert!(request.answers.is_none());
    }
}
