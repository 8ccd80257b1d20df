//! HTTP error mapping for API handlers.

use crate::envelope::ApiResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use notesafe_core::AppError;

/// Handler error that renders as a failed [`ApiResponse`].
#[derive(Debug)]
pub struct HttpError(pub AppError);

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl HttpError {
    /// Status code and client-visible message for the wrapped error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Note not found".to_string()),
            AppError::InvalidInput(msg) => {
                tracing::error!("Stored note content failed to decode: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Stored note content is corrupted".to_string(),
                )
            }
            AppError::StorageMessage(msg) => {
                tracing::error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error".to_string(),
                )
            }
            other => {
                tracing::error!("Internal error: {:?}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(ApiResponse::<()>::failure(message))).into_response()
    }
}
