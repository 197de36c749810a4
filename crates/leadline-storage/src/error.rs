//! Storage error types.
//!
//! Every variant carries the backend's own reason so the server can log the
//! full cause while answering the caller generically.

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to connect to or prepare the store.
    #[error("failed to open lead store at '{location}': {reason}")]
    Open { location: String, reason: String },

    /// Failed to insert a lead.
    #[error("failed to insert lead: {reason}")]
    Insert { reason: String },

    /// Failed to read a lead back.
    #[error("failed to read lead {id}: {reason}")]
    Read { id: i32, reason: String },
}
