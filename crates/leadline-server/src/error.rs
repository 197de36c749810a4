//! HTTP error types for `Leadline` server.
//!
//! Validation failures are the caller's fault and are returned verbatim as
//! `{ "message", "field" }`. Everything else is logged with full detail and
//! answered with a generic 500 so internals never reach the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use leadline_core::ValidationError;
use leadline_storage::StorageError;

/// Message returned for every unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Application-level error returned from HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body failed the shared schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Anything else (storage down, driver error, ...).
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON body for a 500.
#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => (StatusCode::BAD_REQUEST, axum::Json(err)).into_response(),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                let body = ErrorBody {
                    message: INTERNAL_ERROR_MESSAGE,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        Self::Internal(err.to_string())
    }
}
