//! Lead submission schema.
//!
//! Fields are checked in column order (`email`, `companyName`, `name`,
//! `message`) and the first failure wins. Every field is trimmed; optional
//! fields that end up empty are treated as absent. Over-length values are
//! rejected, never truncated.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::model::NewLead;

/// Upper bound, in characters, for `email`, `name` and `companyName`.
pub const MAX_SHORT_TEXT_LEN: usize = 255;

pub const EMAIL_FIELD: &str = "email";
pub const COMPANY_NAME_FIELD: &str = "companyName";
pub const NAME_FIELD: &str = "name";
pub const MESSAGE_FIELD: &str = "message";
/// Pseudo-field used when the payload as a whole cannot be read.
pub const BODY_FIELD: &str = "body";

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const TOO_LONG_MESSAGE: &str = "Must be at most 255 characters";
pub const EXPECTED_STRING_MESSAGE: &str = "Expected a string";
pub const EXPECTED_OBJECT_MESSAGE: &str = "Expected an object";
pub const INVALID_JSON_MESSAGE: &str = "Request body must be valid JSON";

/// Raw, unvalidated lead input as typed by a visitor or sent by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub email: Option<String>,
    pub company_name: Option<String>,
    pub name: Option<String>,
    pub message: Option<String>,
}

impl LeadSubmission {
    /// Validate and normalize into a [`NewLead`] ready to persist.
    ///
    /// # Errors
    ///
    /// Returns the first failing field: a missing or malformed `email`, or an
    /// `email`, `companyName` or `name` longer than [`MAX_SHORT_TEXT_LEN`].
    pub fn validate(&self) -> Result<NewLead, ValidationError> {
        let email = checked_email(self.email.as_deref())?;
        let company_name = bounded(COMPANY_NAME_FIELD, self.company_name.as_deref())?;
        let name = bounded(NAME_FIELD, self.name.as_deref())?;
        let message = normalize(self.message.as_deref()).map(str::to_owned);

        Ok(NewLead {
            email,
            name,
            company_name,
            message,
        })
    }
}

/// Parse and validate a raw JSON request body in one step.
///
/// Each field is read and validated completely before the next one is
/// looked at, so a bad `email` is reported even when a later field has the
/// wrong type.
///
/// # Errors
///
/// Returns a [`ValidationError`] on `body` if the bytes are not a JSON
/// object, and otherwise on the first field, in column order, that has the
/// wrong type or fails the checks of [`LeadSubmission::validate`]. Missing
/// keys and `null` are both "absent"; unknown keys are ignored.
pub fn parse_submission(body: &[u8]) -> Result<NewLead, ValidationError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| ValidationError::new(BODY_FIELD, INVALID_JSON_MESSAGE))?;
    let fields = as_object(&value)?;

    let email = checked_email(string_field(fields, EMAIL_FIELD, INVALID_EMAIL_MESSAGE)?)?;
    let company_name = bounded(
        COMPANY_NAME_FIELD,
        string_field(fields, COMPANY_NAME_FIELD, EXPECTED_STRING_MESSAGE)?,
    )?;
    let name = bounded(
        NAME_FIELD,
        string_field(fields, NAME_FIELD, EXPECTED_STRING_MESSAGE)?,
    )?;
    let message = normalize(string_field(fields, MESSAGE_FIELD, EXPECTED_STRING_MESSAGE)?)
        .map(str::to_owned);

    Ok(NewLead {
        email,
        name,
        company_name,
        message,
    })
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    match value {
        Value::Object(fields) => Ok(fields),
        _ => Err(ValidationError::new(BODY_FIELD, EXPECTED_OBJECT_MESSAGE)),
    }
}

fn string_field<'a>(
    fields: &'a Map<String, Value>,
    field: &str,
    type_message: &str,
) -> Result<Option<&'a str>, ValidationError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(_) => Err(ValidationError::new(field, type_message)),
    }
}

fn checked_email(value: Option<&str>) -> Result<String, ValidationError> {
    let email = value
        .map(str::trim)
        .filter(|email| validator::validate_email(*email))
        .ok_or_else(|| ValidationError::new(EMAIL_FIELD, INVALID_EMAIL_MESSAGE))?;
    check_len(EMAIL_FIELD, email)?;
    Ok(email.to_owned())
}

fn normalize(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

fn bounded(field: &str, value: Option<&str>) -> Result<Option<String>, ValidationError> {
    match normalize(value) {
        Some(text) => {
            check_len(field, text)?;
            Ok(Some(text.to_owned()))
        }
        None => Ok(None),
    }
}

// Counted in chars to agree with `varchar(n)`.
fn check_len(field: &str, text: &str) -> Result<(), ValidationError> {
    if text.chars().count() > MAX_SHORT_TEXT_LEN {
        return Err(ValidationError::new(field, TOO_LONG_MESSAGE));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(email: &str) -> LeadSubmission {
        LeadSubmission {
            email: Some(email.to_owned()),
            ..LeadSubmission::default()
        }
    }

    #[test]
    fn valid_email_only() {
        let lead = submission("jane@bank.com").validate().unwrap();
        assert_eq!(lead.email, "jane@bank.com");
        assert_eq!(lead.name, None);
        assert_eq!(lead.company_name, None);
        assert_eq!(lead.message, None);
    }

    #[test]
    fn malformed_emails_rejected_on_email_field() {
        for bad in ["not-an-email", "", "   ", "jane@", "@bank.com", "jane bank.com"] {
            let err = submission(bad).validate().unwrap_err();
            assert_eq!(err.field, "email", "input {bad:?}");
            assert_eq!(err.message, "Please enter a valid email address");
        }
    }

    #[test]
    fn missing_email_rejected_on_email_field() {
        let err = LeadSubmission::default().validate().unwrap_err();
        assert_eq!(err, ValidationError::new("email", INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn fields_are_trimmed_and_blank_optionals_dropped() {
        let lead = LeadSubmission {
            email: Some("  jane@bank.com ".to_owned()),
            company_name: Some("  First National Bank ".to_owned()),
            name: Some("   ".to_owned()),
            message: Some(String::new()),
        }
        .validate()
        .unwrap();

        assert_eq!(lead.email, "jane@bank.com");
        assert_eq!(lead.company_name.as_deref(), Some("First National Bank"));
        assert_eq!(lead.name, None);
        assert_eq!(lead.message, None);
    }

    #[test]
    fn short_fields_accept_exactly_255_chars() {
        let at_limit = "a".repeat(MAX_SHORT_TEXT_LEN);
        let lead = LeadSubmission {
            name: Some(at_limit.clone()),
            company_name: Some(at_limit.clone()),
            ..submission("jane@bank.com")
        }
        .validate()
        .unwrap();
        assert_eq!(lead.name.as_deref(), Some(at_limit.as_str()));
        assert_eq!(lead.company_name.as_deref(), Some(at_limit.as_str()));
    }

    #[test]
    fn short_fields_reject_256_chars() {
        let over = "a".repeat(MAX_SHORT_TEXT_LEN + 1);

        let err = LeadSubmission {
            name: Some(over.clone()),
            ..submission("jane@bank.com")
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::new("name", TOO_LONG_MESSAGE));

        let err = LeadSubmission {
            company_name: Some(over),
            ..submission("jane@bank.com")
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "companyName");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let wide = "é".repeat(MAX_SHORT_TEXT_LEN);
        assert!(wide.len() > MAX_SHORT_TEXT_LEN);
        let lead = LeadSubmission {
            name: Some(wide),
            ..submission("jane@bank.com")
        }
        .validate();
        assert!(lead.is_ok());
    }

    #[test]
    fn over_long_email_rejected_on_length() {
        // 64-char local part and 63-char labels are the most the syntax check allows.
        let label = "b".repeat(63);
        let email = format!("{}@{label}.{label}.{label}.com", "a".repeat(64));
        assert!(email.chars().count() > MAX_SHORT_TEXT_LEN);
        assert!(validator::validate_email(email.as_str()));

        let err = submission(&email).validate().unwrap_err();
        assert_eq!(err, ValidationError::new("email", TOO_LONG_MESSAGE));

        let body = json!({ "email": email });
        let err = parse_submission(body.to_string().as_bytes()).unwrap_err();
        assert_eq!(err, ValidationError::new("email", TOO_LONG_MESSAGE));
    }

    #[test]
    fn message_is_unbounded() {
        let long = "x".repeat(10_000);
        let lead = LeadSubmission {
            message: Some(long.clone()),
            ..submission("jane@bank.com")
        }
        .validate()
        .unwrap();
        assert_eq!(lead.message, Some(long));
    }

    #[test]
    fn email_error_reported_before_other_fields() {
        let err = LeadSubmission {
            email: Some("nope".to_owned()),
            name: Some("a".repeat(300)),
            ..LeadSubmission::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn parse_full_body() {
        let body = json!({
            "name": "Jane Smith",
            "companyName": "First National Bank",
            "email": "jane@bank.com",
            "message": "Tell us about your goals",
            "utm_source": "ignored"
        });
        let lead = parse_submission(body.to_string().as_bytes()).unwrap();
        assert_eq!(lead.name.as_deref(), Some("Jane Smith"));
        assert_eq!(lead.company_name.as_deref(), Some("First National Bank"));
        assert_eq!(lead.message.as_deref(), Some("Tell us about your goals"));
    }

    #[test]
    fn parse_accepts_null_optionals() {
        let body = json!({ "email": "jane@bank.com", "name": null, "companyName": null });
        let lead = parse_submission(body.to_string().as_bytes()).unwrap();
        assert_eq!(lead.name, None);
        assert_eq!(lead.company_name, None);
    }

    #[test]
    fn parse_empty_object_fails_on_email() {
        let err = parse_submission(b"{}").unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let err = parse_submission(b"{\"email\":").unwrap_err();
        assert_eq!(err, ValidationError::new("body", INVALID_JSON_MESSAGE));
    }

    #[test]
    fn parse_rejects_non_object() {
        let err = parse_submission(b"[\"jane@bank.com\"]").unwrap_err();
        assert_eq!(err, ValidationError::new("body", EXPECTED_OBJECT_MESSAGE));
    }

    #[test]
    fn parse_rejects_wrong_types() {
        let err = parse_submission(br#"{"email": 42}"#).unwrap_err();
        assert_eq!(err, ValidationError::new("email", INVALID_EMAIL_MESSAGE));

        let err = parse_submission(br#"{"email": "jane@bank.com", "name": 42}"#).unwrap_err();
        assert_eq!(err, ValidationError::new("name", EXPECTED_STRING_MESSAGE));
    }

    #[test]
    fn parse_reports_bad_email_before_later_type_errors() {
        let err = parse_submission(br#"{"email": "not-an-email", "name": 42}"#).unwrap_err();
        assert_eq!(err, ValidationError::new("email", INVALID_EMAIL_MESSAGE));

        let body = json!({ "email": "jane@bank.com", "companyName": "a".repeat(256), "message": 7 });
        let err = parse_submission(body.to_string().as_bytes()).unwrap_err();
        assert_eq!(err, ValidationError::new("companyName", TOO_LONG_MESSAGE));
    }

    #[test]
    fn validation_error_serializes_to_api_shape() {
        let err = ValidationError::new("email", INVALID_EMAIL_MESSAGE);
        let json = serde_json::to_value(err).unwrap();
        assert_eq!(
            json,
            json!({ "message": "Please enter a valid email address", "field": "email" })
        );
    }
}
