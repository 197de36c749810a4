//! Shared lead schema for `Leadline`.
//!
//! This crate is the single definition of what a valid lead submission looks
//! like. The HTTP server validates request bodies with it and the client
//! validates form input with it before anything goes over the wire, so the
//! two sides cannot drift apart.
//!
//! - [`schema`] — parsing and validation of raw submissions into [`NewLead`]
//! - [`model`] — the persisted [`Lead`] record
//! - [`routes`] — paths and methods of the lead API

pub mod error;
pub mod model;
pub mod routes;
pub mod schema;

pub use error::ValidationError;
pub use model::{Lead, NewLead};
pub use schema::{LeadSubmission, parse_submission};
