use crate::error::AppResult;
use async_trait::async_trait;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    ConnectOptions, PgPool,
};
use std::str::FromStr;
use std::time::Duration;

/// Read access to the Pokemon store.
///
/// The single shared connection pool lives behind this trait; no other
/// component acquires or releases connections directly. The service layer
/// depends on the trait so it can be exercised with test doubles.
#[async_trait]
pub trait PokemonStore: Send + Sync {
    /// Execute `query` with the given bind parameters and return the
    /// single JSON column of the first row as a byte payload.
    ///
    /// Zero rows (or a NULL column) yield an empty payload with no error;
    /// callers cannot distinguish the two, and a decode failure upstream
    /// covers both. Any execution error is returned verbatim, with no
    /// retry or classification.
    async fn query_json(&self, query: &str, id: i32, lang: &str) -> AppResult<Vec<u8>>;
}

/// Database repository
#[derive(Clone)]
pub struct Repository {
    pool: PgPool,
}

impl Repository {
    /// Create a new repository with a connection pool.
    ///
    /// Pool construction failure is a startup error; the pool is built
    /// once and shared across all request handlers for the process
    /// lifetime.
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        acquire_timeout_seconds: u64,
    ) -> AppResult<Self> {
        let options = PgConnectOptions::from_str(database_url)
            .map_err(|e| {
                crate::error::AppError::Configuration(format!("Invalid database URL: {}", e))
            })?
            .disable_statement_logging();

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_seconds))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl PokemonStore for Repository {
    async fn query_json(&self, query: &str, id: i32, lang: &str) -> AppResult<Vec<u8>> {
        // Parameters are bound, never interpolated into the query text.
        // The stored procedure returns at most one row; only the first is
        // consulted.
        let row: Option<Option<String>> = sqlx::query_scalar(query)
            .bind(id)
            .bind(lang)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.flatten().map(String::into_bytes).unwrap_or_default())
    }
}
