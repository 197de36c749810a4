//! Server configuration for `Leadline`.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `LEADLINE_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "postgres://localhost/leadline";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Where leads are stored.
    pub storage_backend: StorageBackendType,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Landing page build directory, served for every non-API path.
    pub static_dir: Option<PathBuf>,
}

/// Supported lead stores.
#[derive(Clone, PartialEq, Eq)]
pub enum StorageBackendType {
    /// In-memory (development only, leads lost on restart).
    Memory,
    /// PostgreSQL `leads` table.
    Postgres { url: String, max_connections: u32 },
}

// The URL may embed a password.
impl std::fmt::Debug for StorageBackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => f.write_str("Memory"),
            Self::Postgres {
                max_connections, ..
            } => f
                .debug_struct("Postgres")
                .field("url", &"[redacted]")
                .field("max_connections", max_connections)
                .finish(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (binds to `0.0.0.0`)
    /// - `LEADLINE_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:5000`)
    /// - `LEADLINE_STORAGE` — `memory` or `postgres` (default: `memory`)
    /// - `DATABASE_URL` — PostgreSQL connection string (used when `LEADLINE_STORAGE=postgres`)
    /// - `LEADLINE_DB_MAX_CONNECTIONS` — pool size (default: `10`)
    /// - `LEADLINE_LOG_LEVEL` — log filter (default: `info`)
    /// - `LEADLINE_STATIC_DIR` — landing page build directory (optional)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let default_addr = SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT));

        // Priority: LEADLINE_BIND_ADDR > PORT > default 127.0.0.1:5000
        let bind_addr = if let Some(addr) = var("LEADLINE_BIND_ADDR") {
            addr.parse().unwrap_or(default_addr)
        } else if let Some(port) = var("PORT") {
            SocketAddr::from(([0, 0, 0, 0], port.parse().unwrap_or(DEFAULT_PORT)))
        } else {
            default_addr
        };

        let storage_backend = match var("LEADLINE_STORAGE")
            .unwrap_or_else(|| "memory".to_owned())
            .to_lowercase()
            .as_str()
        {
            "postgres" | "postgresql" => StorageBackendType::Postgres {
                url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
                max_connections: var("LEADLINE_DB_MAX_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            },
            _ => StorageBackendType::Memory,
        };

        let log_level = var("LEADLINE_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        let static_dir = var("LEADLINE_STATIC_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Self {
            bind_addr,
            storage_backend,
            log_level,
            static_dir,
        }
    }
}
