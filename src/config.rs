//! Store configuration, injected at construction. No process-wide state.

use crate::error::StoreError;
use serde::Deserialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug, Deserialize)]
pub struct StoreConfig {
    /// SQLite URL, e.g. `sqlite://orderdesk.db` or `sqlite::memory:`.
    pub database_url: String,
    pub max_connections: u32,
}

impl StoreConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        StoreConfig {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Read `DATABASE_URL` and optional `DATABASE_MAX_CONNECTIONS` from the
    /// environment, honoring a `.env` file when present.
    pub fn from_env() -> Result<Self, StoreError> {
        dotenvy::dotenv().ok();
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| StoreError::Config("DATABASE_URL is not set".into()))?;
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        Ok(StoreConfig {
            database_url,
            max_connections,
        })
    }

    /// Open a bounded connection pool, creating the database file if missing.
    pub async fn connect(&self) -> Result<SqlitePool, StoreError> {
        // REFERENCES clauses in the DDL are documentation; integrity across
        // rows is maintained by the placement and delete transactions.
        // Enforcement would block deleting clients or orders with history.
        let options = SqliteConnectOptions::from_str(&self.database_url)?
            .create_if_missing(true)
            .foreign_keys(false);
        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(options)
            .await?;
        tracing::info!(url = %self.database_url, max_connections = self.max_connections, "store connected");
        Ok(pool)
    }
}
