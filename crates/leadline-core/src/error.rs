//! Error types for `leadline-core`.

use serde::Serialize;

/// A submission failed the shared schema.
///
/// Always scoped to a single field, named by its JSON path (`email`,
/// `companyName`, ...) or `body` when the payload as a whole is unusable.
/// Serializes to the `{ "message": ..., "field": ... }` shape returned by the
/// API on a 400.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("invalid field '{field}': {message}")]
pub struct ValidationError {
    /// Human-readable message, safe to show to the end user.
    pub message: String,
    /// JSON path of the offending field.
    pub field: String,
}

impl ValidationError {
    /// Build an error for `field` with a user-facing `message`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }
}
