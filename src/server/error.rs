use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::error;

use crate::error::PsaError;

/// Unified error type that renders as a JSON
/// `{"success": false, "error": "..."}` response with an appropriate HTTP
/// status code.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), message = %self.message, "request failed");
        }
        (
            self.status,
            Json(json!({ "success": false, "error": self.message })),
        )
            .into_response()
    }
}

impl From<PsaError> for AppError {
    fn from(e: PsaError) -> Self {
        match &e {
            PsaError::UpstreamNotConfigured
            | PsaError::InvalidCertFormat(_)
            | PsaError::UpstreamHttp { .. }
            | PsaError::UpstreamTransport(_)
            | PsaError::NoCertData
            | PsaError::Parse(_) => AppError::bad_request(e.to_string()),
            PsaError::DuplicateCert(_) => AppError::conflict(e.to_string()),
            PsaError::NotFound(_) => AppError::not_found(e.to_string()),
            PsaError::Config(_) | PsaError::Io(_) | PsaError::Unexpected(_) => {
                AppError::internal(e.to_string())
            }
        }
    }
}
