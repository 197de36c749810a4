//! Application assembly.
//!
//! Opens the configured lead store and builds the router with its middleware
//! stack. Kept out of `main` so integration tests drive the exact same
//! router in-process.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use leadline_storage::{LeadStore, MemoryStore};

use crate::config::{ServerConfig, StorageBackendType};
use crate::routes;
use crate::state::AppState;

/// Open the configured store and wrap it in shared state.
///
/// # Errors
///
/// Fails if the store cannot be opened, or if PostgreSQL is requested in a
/// build without the `postgres-backend` feature.
pub async fn build_state(config: &ServerConfig) -> anyhow::Result<Arc<AppState>> {
    let store: Arc<dyn LeadStore> = match &config.storage_backend {
        StorageBackendType::Memory => {
            info!("using in-memory lead store (leads will not persist)");
            Arc::new(MemoryStore::new())
        }
        #[cfg(feature = "postgres-backend")]
        StorageBackendType::Postgres {
            url,
            max_connections,
        } => {
            info!(url = %"[redacted]", max_connections, "using PostgreSQL lead store");
            Arc::new(
                leadline_storage::PostgresStore::connect(url, *max_connections)
                    .await
                    .context("failed to connect to PostgreSQL lead store")?,
            )
        }
        #[cfg(not(feature = "postgres-backend"))]
        StorageBackendType::Postgres { .. } => {
            anyhow::bail!("PostgreSQL store requested but feature 'postgres-backend' is not enabled");
        }
    };

    Ok(Arc::new(AppState::new(store)))
}

/// Build the Axum router with all routes and middleware.
///
/// # Errors
///
/// Fails if `static_dir` is given but does not exist.
pub fn build_router(state: Arc<AppState>, static_dir: Option<&Path>) -> anyhow::Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let mut app = Router::new()
        .merge(routes::leads::router())
        .merge(routes::health::router());

    if let Some(dir) = static_dir {
        let site = routes::site::service(dir).context("failed to set up landing page hosting")?;
        info!(dir = %dir.display(), "serving landing page");
        app = app.fallback_service(site);
    }

    Ok(app
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state))
}
