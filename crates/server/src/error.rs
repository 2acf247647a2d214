//! Application error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use trial_survey_core::SurveyError;

/// JSON error body: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    Definitions(String),
    Grammar(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::Definitions(msg) => {
                tracing::error!(error = %msg, "Definitions could not be loaded");
                msg
            }
            AppError::Grammar(msg) => {
                tracing::error!(error = %msg, "Grammar correction failed");
                msg
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                msg
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error: message }),
        )
            .into_response()
    }
}

impl From<SurveyError> for AppError {
    fn from(err: SurveyError) -> Self {
        match err {
            SurveyError::DefinitionsIo(_) | SurveyError::DefinitionsFormat(_) => {
                AppError::Definitions(err.to_string())
            }
            SurveyError::Grammar(_) => AppError::Grammar(err.to_string()),
            SurveyError::Pattern(_) => AppError::Internal(err.to_string()),
        }
    }
}
