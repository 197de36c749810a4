//! Shared application state for `Leadline` server.

use std::sync::Arc;

use leadline_storage::LeadStore;

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// Where captured leads are written.
    pub store: Arc<dyn LeadStore>,
}

impl AppState {
    /// Build state around an already opened store.
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self { store }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
