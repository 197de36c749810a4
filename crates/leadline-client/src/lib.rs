//! `Leadline` client.
//!
//! Two layers:
//!
//! - [`LeadForm`] — the "Request Demo" form as a state machine. It validates
//!   with the shared schema before anything is sent, allows one submission
//!   in flight, and turns the outcome into a single [`Notification`].
//! - [`LeadsClient`] — the HTTP implementation of [`LeadTransport`], the seam
//!   the form submits through.
//!
//! # Example
//!
//! ```rust,no_run
//! use leadline_client::{LeadForm, LeadsClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LeadsClient::new()?;
//! let mut form = LeadForm::new();
//! form.set_name("Jane Smith");
//! form.set_email("jane@bank.com");
//!
//! let notification = form.submit(&client).await?;
//! println!("{}: {}", notification.title, notification.description);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod form;
mod transport;

pub use client::{LeadsClient, LeadsClientConfig};
pub use error::{ClientError, FormError, GENERIC_FAILURE_MESSAGE};
pub use form::{FormFields, FormPhase, LeadForm, Notification, NotificationKind};
pub use transport::LeadTransport;
