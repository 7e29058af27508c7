use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as a JSON object with an `error` field.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MissingInput(String),

    #[error("{0}")]
    Extraction(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Failed to parse AI response. Please try again.")]
    AiParse { raw_response: String },

    #[error("AI Service Error: {0}")]
    AiService(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse { raw_response, .. } => AppError::AiParse { raw_response },
            other => AppError::AiService(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::BadRequest(format!("Malformed form data: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, body) = match &self {
            AppError::MissingInput(_) | AppError::Extraction(_) | AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            AppError::AiParse { raw_response } => {
                tracing::error!("Unparseable AI response: {raw_response}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": message, "raw_response": raw_response }),
                )
            }
            AppError::AiService(msg) => {
                tracing::error!("AI service error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to render page" }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal server error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
