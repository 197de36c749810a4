//! The lead capture form.
//!
//! ```text
//! Idle ──begin_submit──▶ Submitting ──complete_submit──▶ Idle
//!   ▲        │                                 (success: fields cleared,
//!   └────────┘ invalid input:                   error: fields kept)
//!              inline error, nothing sent
//! ```
//!
//! While `Submitting`, further submits are refused so one click can never
//! produce two leads.

use tracing::debug;

use leadline_core::{Lead, LeadSubmission, NewLead, ValidationError};

use crate::error::{ClientError, FormError};
use crate::transport::LeadTransport;

pub const SUCCESS_TITLE: &str = "Request Received";
pub const SUCCESS_DESCRIPTION: &str = "We'll be in touch shortly to schedule your demo.";
pub const FAILURE_TITLE: &str = "Submission Failed";

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Editable; submit enabled.
    #[default]
    Idle,
    /// A request is in flight; submit disabled.
    Submitting,
}

/// The four text inputs as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub company_name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    fn to_submission(&self) -> LeadSubmission {
        LeadSubmission {
            email: Some(self.email.clone()),
            company_name: Some(self.company_name.clone()),
            name: Some(self.name.clone()),
            message: Some(self.message.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient toast describing how a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    fn success() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: SUCCESS_TITLE.to_owned(),
            description: SUCCESS_DESCRIPTION.to_owned(),
        }
    }

    fn failure(description: &str) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: FAILURE_TITLE.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// State of one "Request Demo" form instance.
#[derive(Debug, Clone, Default)]
pub struct LeadForm {
    fields: FormFields,
    phase: FormPhase,
    field_error: Option<ValidationError>,
}

impl LeadForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether the submit control should be disabled.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// The inline error currently shown, if any.
    #[must_use]
    pub fn field_error(&self) -> Option<&ValidationError> {
        self.field_error.as_ref()
    }

    /// Inline message for `field` (`email`, `companyName`, ...), if any.
    #[must_use]
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.field_error
            .as_ref()
            .filter(|err| err.field == field)
            .map(|err| err.message.as_str())
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.fields.name = value.into();
        self.clear_error_for(leadline_core::schema::NAME_FIELD);
    }

    pub fn set_company_name(&mut self, value: impl Into<String>) {
        self.fields.company_name = value.into();
        self.clear_error_for(leadline_core::schema::COMPANY_NAME_FIELD);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.fields.email = value.into();
        self.clear_error_for(leadline_core::schema::EMAIL_FIELD);
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.fields.message = value.into();
        self.clear_error_for(leadline_core::schema::MESSAGE_FIELD);
    }

    /// Validate the fields and enter `Submitting`.
    ///
    /// On success the caller owns the returned payload and must send it
    /// exactly once, then report back through [`complete_submit`](Self::complete_submit).
    ///
    /// # Errors
    ///
    /// - [`FormError::InFlight`] if a submission is already running.
    /// - [`FormError::Invalid`] if the fields fail the shared schema. The
    ///   error is also kept as the inline field error and the form stays
    ///   `Idle`.
    pub fn begin_submit(&mut self) -> Result<NewLead, FormError> {
        if self.is_submitting() {
            return Err(FormError::InFlight);
        }

        match self.fields.to_submission().validate() {
            Ok(lead) => {
                self.field_error = None;
                self.phase = FormPhase::Submitting;
                Ok(lead)
            }
            Err(err) => {
                debug!(field = %err.field, "lead form failed local validation");
                self.field_error = Some(err.clone());
                Err(FormError::Invalid(err))
            }
        }
    }

    /// Apply the result of the request started by `begin_submit` and return
    /// to `Idle`.
    ///
    /// Success clears every field. Failure keeps them so the user can fix
    /// and resubmit; a server-side validation rejection also becomes the
    /// inline field error.
    pub fn complete_submit(&mut self, result: Result<Lead, ClientError>) -> Notification {
        self.phase = FormPhase::Idle;

        match result {
            Ok(lead) => {
                debug!(lead_id = lead.id, "lead submitted");
                self.fields = FormFields::default();
                self.field_error = None;
                Notification::success()
            }
            Err(err) => {
                if let ClientError::Api {
                    message,
                    field: Some(field),
                    ..
                } = &err
                {
                    self.field_error = Some(ValidationError::new(field.as_str(), message.as_str()));
                }
                Notification::failure(err.user_message())
            }
        }
    }

    /// Validate, send once through `transport`, and settle the outcome.
    ///
    /// # Errors
    ///
    /// Same as [`begin_submit`](Self::begin_submit); in both cases no request
    /// is made. Transport failures are not errors here, they come back as an
    /// error [`Notification`].
    pub async fn submit<T>(&mut self, transport: &T) -> Result<Notification, FormError>
    where
        T: LeadTransport + ?Sized,
    {
        let lead = self.begin_submit()?;
        let result = transport.create_lead(&lead).await;
        Ok(self.complete_submit(result))
    }

    fn clear_error_for(&mut self, field: &str) {
        if self.error_for(field).is_some() {
            self.field_error = None;
        }
    }
}
