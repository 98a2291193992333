//! Landing page and its waitlist form, resolved with public configuration.

use axum::{
    Form, Router,
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use time::OffsetDateTime;

use super::acquire_submission_permit;
use crate::{
    adapters::http::app_state::AppState,
    app_error::AppError,
    application::page_templates::LandingPage,
    domain::entities::submission_context::SubmissionContext,
};

#[derive(Deserialize)]
struct WaitlistFormData {
    #[serde(default)]
    email: String,
    form_id: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(landing_page).post(submit_waitlist_form))
}

/// GET /
async fn landing_page() -> Html<String> {
    Html(LandingPage::fresh(current_year()).render())
}

/// POST /
/// Every outcome re-renders the page with a notification; only a successful
/// join clears the email field. A refused form id also re-renders, with the
/// gate's status code.
async fn submit_waitlist_form(
    State(app_state): State<AppState>,
    Form(form): Form<WaitlistFormData>,
) -> Response {
    let year = current_year();

    let _permit = match acquire_submission_permit(&app_state, form.form_id.as_deref()) {
        Ok(permit) => permit,
        Err(err) => return rejected_page(&err, &form.email, year),
    };

    let outcome = app_state
        .waitlist_use_cases
        .join(SubmissionContext::Public, &form.email)
        .await;

    Html(LandingPage::after_submission(&outcome, &form.email, year).render()).into_response()
}

fn rejected_page(err: &AppError, typed_email: &str, year: i32) -> Response {
    tracing::warn!(error = %err, "Waitlist form submission refused");
    let page = LandingPage::after_rejection(err, typed_email, year);
    (err.status_code(), Html(page.render())).into_response()
}

fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}
