//! Survey form and submission handlers

use axum::{
    Extension, Form, Json,
    extract::{State, rejection::FormRejection},
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::AppError;
use crate::middleware::RequestId;

/// Returned whenever the trial registry does not yield criteria text
pub const FETCH_FAILED_MESSAGE: &str = "Unable to fetch or process the trial data.";

/// Submitted form fields
#[derive(Debug, Deserialize)]
pub struct SurveyForm {
    #[serde(default)]
    condition: String,
}

/// `{"questions": [...]}` or `{"error": "..."}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyResponse {
    Questions(Vec<String>),
    Error(String),
}

/// GET / - Render the condition form
pub async fn form() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

/// POST / - Fetch criteria for the condition and turn them into questions
pub async fn submit(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    form: Result<Form<SurveyForm>, FormRejection>,
) -> Result<Response, AppError> {
    // A body that is not a url-encoded form cannot name a condition.
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected survey submission");
            record_outcome("invalid");
            let status = rejection.status();
            return Ok((status, Json(SurveyResponse::Error(rejection.body_text()))).into_response());
        }
    };

    let condition = form.condition.trim();
    tracing::info!(condition = condition, "Survey requested");

    let definitions = crate::load_definitions(&state.definitions_path)
        .await
        .inspect_err(|_| record_outcome("failed"))?;

    let Some(criteria) = state.fetcher.find_criteria(condition).await else {
        record_outcome("not_found");
        return Ok(Json(SurveyResponse::Error(FETCH_FAILED_MESSAGE.to_string())).into_response());
    };

    let questions = state
        .generator
        .generate(&criteria, &definitions)
        .await
        .inspect_err(|_| record_outcome("failed"))?;

    tracing::info!(
        request_id = %request_id.0,
        count = questions.len(),
        "Survey generated"
    );
    record_outcome("questions");

    Ok(Json(SurveyResponse::Questions(
        questions.iter().map(ToString::to_string).collect(),
    ))
    .into_response())
}

fn record_outcome(outcome: &'static str) {
    metrics::counter!("survey_requests_total", "outcome" => outcome).increment(1);
}
