use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::engine::CoreError;

/// Errors surfaced by request handlers.
///
/// The payload carries the internal cause for logs; clients only ever see
/// the fixed message for the status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error("Unprocessable: {0}")]
    Unprocessable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Client-facing message for a status code.
    pub fn message_for(status: StatusCode) -> &'static str {
        match status {
            StatusCode::BAD_REQUEST => "bad request",
            StatusCode::NOT_FOUND => "resource not found",
            StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
            StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
            _ => "internal server error",
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(msg) => AppError::NotFound(msg),
            CoreError::Unprocessable(msg) => AppError::Unprocessable(msg),
        }
    }
}

/// The `{success: false, error, message}` body for `status`.
pub fn error_envelope(status: StatusCode) -> Response {
    let body = Json(json!({
        "success": false,
        "error": status.as_u16(),
        "message": AppError::message_for(status),
    }));

    (status, body).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(status = status.as_u16(), cause = %self, "Request failed");
        error_envelope(status)
    }
}
