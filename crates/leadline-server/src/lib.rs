//! `Leadline` HTTP server.
//!
//! Wires the shared lead schema and a lead store into an Axum router. Serves
//! the JSON API under `/api/*` and, when configured, the landing page build
//! for every other path.

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
