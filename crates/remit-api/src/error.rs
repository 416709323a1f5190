//! API error type with structured JSON responses.
//!
//! Errors map to HTTP status codes and a stable `{ "error": { code,
//! message } }` body. Upstream failures (pricing API, Graph API) are
//! logged in full but never echoed to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "FORBIDDEN", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type implementing [`IntoResponse`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Signature or verify-token check failed (403).
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Internal error (500). Message is logged but not returned.
    #[error("internal error: {0}")]
    Internal(String),

    /// Pricing or Graph API failure (502). Message is logged but not returned.
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal/upstream error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            Self::Upstream(_) => "An upstream service error occurred".to_string(),
            other => other.to_string(),
        };

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::Upstream(_) => tracing::error!(error = %self, "upstream API error"),
            Self::Forbidden(_) => tracing::warn!(error = %self, "request rejected"),
            Self::BadRequest(_) => {}
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<remit_pricing::PricingError> for AppError {
    fn from(err: remit_pricing::PricingError) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl From<remit_messenger::SendError> for AppError {
    fn from(err: remit_messenger::SendError) -> Self {
        Self::Upstream(err.to_string())
    }
}
