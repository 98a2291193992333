//! JSON waitlist endpoint, resolved with server-side configuration.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Deserialize;

use super::acquire_submission_permit;
use crate::{
    adapters::http::app_state::AppState,
    app_error::AppResult,
    domain::entities::{
        submission_context::SubmissionContext,
        waitlist_outcome::{OutcomeCode, WaitlistOutcome},
    },
};

#[derive(Deserialize)]
struct JoinWaitlistPayload {
    #[serde(default)]
    email: String,
    form_id: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist))
}

/// POST /api/waitlist
/// Returns `{"success": true}` or `{"error": ..., "code": ...}`.
async fn join_waitlist(
    State(app_state): State<AppState>,
    Json(payload): Json<JoinWaitlistPayload>,
) -> AppResult<Response> {
    let _permit = acquire_submission_permit(&app_state, payload.form_id.as_deref())?;

    let outcome = app_state
        .waitlist_use_cases
        .join(SubmissionContext::Server, &payload.email)
        .await;

    Ok(outcome_response(&outcome))
}

fn outcome_response(outcome: &WaitlistOutcome) -> Response {
    let code = outcome.code();
    let status = match code {
        OutcomeCode::Joined => StatusCode::OK,
        OutcomeCode::AlreadyRegistered => StatusCode::CONFLICT,
        OutcomeCode::MissingEmail => StatusCode::BAD_REQUEST,
        OutcomeCode::ConfigurationMissing => StatusCode::SERVICE_UNAVAILABLE,
        OutcomeCode::StoreError | OutcomeCode::UnexpectedError => StatusCode::BAD_GATEWAY,
    };

    let body = match outcome {
        WaitlistOutcome::Joined => serde_json::json!({ "success": true }),
        _ => serde_json::json!({ "error": outcome.message(), "code": code.as_str() }),
    };

    (status, Json(body)).into_response()
}
