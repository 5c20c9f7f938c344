use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::coaching::validation::ValidationError;
use crate::fixtures::service::FixtureError;
use crate::llm_client::{FailureKind, GenerationFailure};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationFailure),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// The fixture routes keep their own flat body: `{"error": "Sport not found"}`.
impl IntoResponse for FixtureError {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(err) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
            }
            // Provider text is shown verbatim so the user can act on it.
            AppError::Generation(failure) => match failure.kind {
                FailureKind::InvalidCredential => (
                    StatusCode::UNAUTHORIZED,
                    "INVALID_CREDENTIAL",
                    failure.message.clone(),
                ),
                FailureKind::ProviderUnavailable => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "PROVIDER_UNAVAILABLE",
                    failure.message.clone(),
                ),
                FailureKind::Unknown => (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_FAILED",
                    failure.message.clone(),
                ),
            },
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });

        if let AppError::Validation(ValidationError::MissingFields(fields)) = &self {
            error["missing_fields"] = json!(fields);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
