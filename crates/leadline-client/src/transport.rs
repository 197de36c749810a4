//! The seam between the form and the network.

use leadline_core::{Lead, NewLead};

use crate::error::ClientError;

/// Delivers one validated lead to the server.
///
/// Implementations make exactly one attempt per call and never retry.
#[async_trait::async_trait]
pub trait LeadTransport: Send + Sync {
    /// Submit `lead` and return the record the server stored.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] if the request fails or the server rejects it.
    async fn create_lead(&self, lead: &NewLead) -> Result<Lead, ClientError>;
}
