use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// A JSON parse failure is kept apart from every other failure so that callers
/// (HTTP clients, the one-shot driver) can report it on its own.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resume JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid resume record: {0}")]
    InvalidRecord(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn is_parse(&self) -> bool {
        matches!(self, AppError::Parse(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Parse(e) => (StatusCode::BAD_REQUEST, "PARSE_ERROR", e.to_string()),
            AppError::InvalidRecord(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_RECORD",
                msg.clone(),
            ),
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "IO_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
