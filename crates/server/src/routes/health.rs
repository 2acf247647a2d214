//! Health check endpoint

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    definitions: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// GET /health - Healthy when the definitions file can be loaded
pub async fn check(State(state): State<AppState>) -> impl IntoResponse {
    match crate::load_definitions(&state.definitions_path).await {
        Ok(definitions) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                definitions: Some(definitions.len()),
                reason: None,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed to load definitions");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    definitions: None,
                    reason: Some(e.to_string()),
                }),
            )
        }
    }
}
