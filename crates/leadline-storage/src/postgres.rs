//! PostgreSQL lead store.
//!
//! Leads live in a single `leads` table. `id` comes from a `SERIAL` column and
//! `created_at` from a `now()` default, so the database is the one assigning
//! identity and time. Each insert is a single `INSERT ... RETURNING`
//! statement; a failure leaves no row behind.
//!
//! Feature-gated behind `postgres-backend`.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::debug;

use leadline_core::{Lead, NewLead};

use crate::{LeadStore, StorageError};

const CREATE_LEADS_TABLE: &str = "CREATE TABLE IF NOT EXISTS leads (\
        id           SERIAL       PRIMARY KEY, \
        email        VARCHAR(255) NOT NULL, \
        company_name VARCHAR(255), \
        name         VARCHAR(255), \
        message      TEXT, \
        created_at   TIMESTAMPTZ  NOT NULL DEFAULT now()\
    )";

#[derive(sqlx::FromRow)]
struct LeadRow {
    id: i32,
    email: String,
    company_name: Option<String>,
    name: Option<String>,
    message: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<LeadRow> for Lead {
    fn from(row: LeadRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            name: row.name,
            company_name: row.company_name,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

/// A lead store backed by PostgreSQL.
///
/// # Examples
///
/// ```no_run
/// # use leadline_storage::PostgresStore;
/// # #[tokio::main]
/// # async fn main() {
/// let store = PostgresStore::connect("postgres://localhost/leadline", 10).await.unwrap();
/// # }
/// ```
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresStore")
            .field("pool", &"[PgPool]")
            .finish_non_exhaustive()
    }
}

impl PostgresStore {
    /// Connect to PostgreSQL and create the `leads` table if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] if the connection or migration fails.
    /// The URL is never included in the error since it may carry credentials.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| StorageError::Open {
                location: "[redacted]".to_owned(),
                reason: e.to_string(),
            })?;

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, running the table migration on it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] if the migration fails.
    pub async fn from_pool(pool: PgPool) -> Result<Self, StorageError> {
        sqlx::query(CREATE_LEADS_TABLE)
            .execute(&pool)
            .await
            .map_err(|e| StorageError::Open {
                location: "leads".to_owned(),
                reason: format!("migration failed: {e}"),
            })?;

        debug!("leads table ready");
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl LeadStore for PostgresStore {
    async fn insert(&self, lead: NewLead) -> Result<Lead, StorageError> {
        let row = sqlx::query_as::<_, LeadRow>(
            r"INSERT INTO leads (email, company_name, name, message)
              VALUES ($1, $2, $3, $4)
              RETURNING id, email, company_name, name, message, created_at",
        )
        .bind(&lead.email)
        .bind(&lead.company_name)
        .bind(&lead.name)
        .bind(&lead.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::Insert {
            reason: e.to_string(),
        })?;

        Ok(row.into())
    }

    async fn get(&self, id: i32) -> Result<Option<Lead>, StorageError> {
        let row = sqlx::query_as::<_, LeadRow>(
            "SELECT id, email, company_name, name, message, created_at FROM leads WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Read {
            id,
            reason: e.to_string(),
        })?;

        Ok(row.map(Lead::from))
    }
}
