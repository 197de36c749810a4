//! HTTP contract of the lead API, shared by server and client.

/// `POST` — submit a lead. Answers 201 with the stored [`Lead`](crate::Lead).
pub const CREATE_LEAD_PATH: &str = "/api/leads";

/// `GET` — liveness probe.
pub const HEALTH_PATH: &str = "/api/health";
