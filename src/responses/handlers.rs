//! Submission and History Handlers
//!
//! POST /survey/submit records one response atomically; GET /responses/me
//! lists the caller's own responses. Both re-verify the session via the
//! [`CurrentUser`] extractor and never reach the store for unauthenticated
//! requests.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::responses::history::{list_for_user, ResponseView};
use crate::responses::recorder::{record_response, SubmitRequest};
use crate::server::schema::ensure_schema;
use crate::server::state::AppState;

/// Body returned by a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// The new response's identifier
    pub id: Uuid,
}

/// Submission handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed body, missing surveyId/answers, or an
///   answer referencing a question outside the survey
/// * `401 Unauthorized` - missing or invalid session cookie
/// * `503 Service Unavailable` - database not configured or unreachable
/// * `500 Internal Server Error` - unexpected store failure
pub async fn submit(
    user: CurrentUser,
    State(state): State<AppState>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Malformed submit payload: {}", e);
        ApiError::validation("Invalid payload")
    })?;

    let survey_id = request
        .survey_id
        .ok_or_else(|| ApiError::validation("Invalid payload"))?;
    let answers = request
        .answers
        .ok_or_else(|| ApiError::validation("Invalid payload"))?;

    let pool = state.pool()?;
    let id = record_response(pool, user.user_id, survey_id, &answers).await?;
    Ok(Json(SubmitResponse { id }))
}

/// History handler
///
/// Runs the schema self-heal probe before reading, then returns the
/// caller's responses newest first (an empty list when there are none).
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid session cookie
/// * `503 Service Unavailable` - database not configured or unreachable
/// * `500 Internal Server Error` - unexpected store failure
pub async fn list_mine(
    user: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<ResponseView>>, ApiError> {
    let pool = state.pool()?;
    ensure_schema(pool, &state.config).await?;
    let responses = list_for_user(pool, user.user_id).await?;
    Ok(Json(responses))
}
