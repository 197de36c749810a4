//! HTTP route handlers.
//!
//! The lead API lives under `/api`; [`site`] serves the landing page build
//! behind it.

pub mod health;
pub mod leads;
pub mod site;
