//! Error types for the `Leadline` client.

use leadline_core::ValidationError;

/// Shown to the user when there is no safe server-provided message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to submit lead";

/// All errors that can occur when talking to the lead API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Invalid client configuration.
    #[error("leadline config error: {0}")]
    Config(String),

    /// The API answered with a non-success status.
    #[error("leadline API error {status_code}: {message}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Message from the response body, or the generic fallback.
        message: String,
        /// Offending field, present on validation rejections.
        field: Option<String>,
    },

    /// Request timed out.
    #[error("leadline request timed out")]
    Timeout,

    /// Network or HTTP client error.
    #[error("leadline network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response carried a body that is not a lead.
    #[error("leadline json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// The text to show the user for this failure.
    ///
    /// Server-provided messages are passed through; transport and decoding
    /// failures collapse to [`GENERIC_FAILURE_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Api { message, .. } => message,
            Self::Config(_) | Self::Timeout | Self::Network(_) | Self::Json(_) => {
                GENERIC_FAILURE_MESSAGE
            }
        }
    }
}

/// Why a form submission did not start.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Another submission from this form is still in flight.
    #[error("a submission is already in progress")]
    InFlight,

    /// The fields failed the shared schema; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
