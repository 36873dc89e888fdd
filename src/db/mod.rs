//! Database connection pool and the query handle shared by all listings.

use std::future::Future;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::errors::AppError;

/// Create a PostgreSQL connection pool with bounded size and connection lifetime.
pub async fn create_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(
            config
                .database_min_connections
                .min(config.database_max_connections),
        )
        .max_lifetime(config.database_max_lifetime)
        .acquire_timeout(config.database_acquire_timeout)
        .connect(&config.database_url)
        .await
}

/// Pool plus the deadline applied to every statement run through it.
///
/// Cheap to clone; lives in `AppState` and is handed to service functions
/// explicitly.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
    query_timeout: Duration,
}

impl Database {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// Run one database future under the query deadline.
    ///
    /// Expiry drops the future (cancelling the statement) and surfaces as
    /// `AppError::QueryTimeout`; it never affects other in-flight calls.
    pub async fn bounded<T, F>(&self, what: &str, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(result) => Ok(result?),
            Err(_) => {
                tracing::warn!(
                    query = what,
                    timeout_ms = self.query_timeout.as_millis() as u64,
                    "Query timed out"
                );
                Err(AppError::QueryTimeout(what.to_string()))
            }
        }
    }
}
