pub mod health;
pub mod landing;
pub mod waitlist;

use axum::Router;
use uuid::Uuid;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    infra::submission_gate::SubmissionPermit,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(landing::router())
        .merge(health::router())
        .nest("/api", waitlist::router())
}

/// Claims the form instance for the duration of the submission. Requests
/// without a form id are not gated.
fn acquire_submission_permit(
    app_state: &AppState,
    form_id: Option<&str>,
) -> AppResult<Option<SubmissionPermit>> {
    let Some(raw) = form_id.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };

    let form_id =
        Uuid::parse_str(raw).map_err(|_| AppError::InvalidInput("Invalid form id".into()))?;

    app_state
        .submission_gate
        .try_acquire(form_id)
        .map(Some)
        .ok_or(AppError::SubmissionInProgress)
}
