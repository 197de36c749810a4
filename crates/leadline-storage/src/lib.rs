//! Lead storage for `Leadline`.
//!
//! This crate defines the [`LeadStore`] trait, the append-only persistence
//! interface behind the lead endpoint. The store owns identity and time: it
//! assigns each lead its `id` and `createdAt` at insert.
//!
//! Two implementations are provided:
//!
//! - [`PostgresStore`] — production store, a `leads` table reached through a
//!   `sqlx` pool (feature `postgres-backend`)
//! - [`MemoryStore`] — in-process, for development and tests

mod error;
mod memory;
#[cfg(feature = "postgres-backend")]
mod postgres;

pub use error::StorageError;
pub use memory::MemoryStore;
#[cfg(feature = "postgres-backend")]
pub use postgres::PostgresStore;

use leadline_core::{Lead, NewLead};

/// Append-only lead persistence.
///
/// Implementations must be safe to share across async tasks (`Send + Sync`).
/// Leads are never updated or deleted.
#[async_trait::async_trait]
pub trait LeadStore: Send + Sync + 'static {
    /// Persist one lead and return the stored record.
    ///
    /// A failed insert leaves nothing behind.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Insert`] if the backend fails.
    async fn insert(&self, lead: NewLead) -> Result<Lead, StorageError>;

    /// Fetch a lead by id. Returns `Ok(None)` if no such lead exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the backend fails.
    async fn get(&self, id: i32) -> Result<Option<Lead>, StorageError>;
}
