//! Survey Handler
//!
//! GET /survey returns the canonical survey with its questions, creating it
//! on first access. Requires a valid session; the session is re-verified by
//! the [`CurrentUser`] extractor regardless of any page-level gate.

use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::server::state::AppState;
use crate::survey::catalog::{get_or_create, SurveyView};

/// Survey fetch handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid session cookie
/// * `503 Service Unavailable` - database not configured or unreachable
/// * `500 Internal Server Error` - unexpected store failure
pub async fn get_survey(
    _user: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<SurveyView>, ApiError> {
    let pool = state.pool()?;
    let survey = get_or_create(pool).await?;
    Ok(Json(survey))
}
