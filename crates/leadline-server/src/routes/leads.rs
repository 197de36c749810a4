//! Lead capture route.
//!
//! The body is read as raw bytes and handed to the shared schema, so a
//! malformed or mistyped payload produces the same field-scoped 400 as a bad
//! email instead of an extractor rejection.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{info, warn};

use leadline_core::routes::CREATE_LEAD_PATH;
use leadline_core::{Lead, parse_submission};

use crate::error::AppError;
use crate::state::AppState;

/// Build the leads router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(CREATE_LEAD_PATH, post(create_lead))
}

/// `POST /api/leads` — validate and store one lead.
///
/// Answers 201 with the stored record, 400 with `{ message, field }` when the
/// schema rejects the body, or a generic 500 when the store fails. Nothing is
/// written unless validation passes.
async fn create_lead(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Lead>), AppError> {
    let new_lead = parse_submission(&body).inspect_err(|err| {
        warn!(field = %err.field, reason = %err.message, "lead submission rejected");
    })?;

    let lead = state.store.insert(new_lead).await?;
    info!(lead_id = lead.id, "lead captured");

    Ok((StatusCode::CREATED, Json(lead)))
}
