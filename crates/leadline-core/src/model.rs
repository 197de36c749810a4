//! Lead data model.
//!
//! A [`NewLead`] is a submission that passed the schema and is ready to be
//! stored. A [`Lead`] is what the store hands back: the same fields plus the
//! server-assigned `id` and `createdAt`. Leads are append-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated, normalized lead that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    /// Contact email. Always syntactically valid.
    pub email: String,
    /// Contact name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Company or institution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Free-form message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A persisted inbound contact request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Unique identifier assigned by the store.
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub message: Option<String>,
    /// Insert time, assigned by the store.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Lead {
        Lead {
            id: 7,
            email: "jane@bank.com".to_owned(),
            name: None,
            company_name: Some("First National Bank".to_owned()),
            message: None,
            created_at: DateTime::parse_from_rfc3339("2025-03-01T12:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn lead_serializes_with_camel_case_and_nulls() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["companyName"], "First National Bank");
        assert!(json["name"].is_null());
        assert!(json["message"].is_null());
        assert_eq!(json["createdAt"], "2025-03-01T12:30:00Z");
    }

    #[test]
    fn new_lead_omits_absent_fields() {
        let new = NewLead {
            email: "jane@bank.com".to_owned(),
            name: None,
            company_name: None,
            message: Some("hi".to_owned()),
        };
        let json = serde_json::to_value(&new).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["message"], "hi");
    }
}
