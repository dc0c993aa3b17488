use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::config::Config;

/// Owns the process-wide database pool. The pool is opened on the first
/// `get_connection` call and reused afterwards; a failed attempt leaves the
/// manager empty so the next call tries again.
pub struct ConnectionManager {
    options: PgConnectOptions,
    max_connections: u32,
    idle_timeout: Duration,
    acquire_timeout: Duration,
    pool: OnceCell<PgPool>,
}

impl ConnectionManager {
    pub fn new(config: &Config) -> Result<Self, sqlx::Error> {
        let socket_timeout_ms = config.db_socket_timeout.as_millis().to_string();
        let options = PgConnectOptions::from_str(&config.database_url)?
            .options([("statement_timeout", socket_timeout_ms)]);

        // Hosted instances may be frozen between invocations, so they hold
        // a single connection and let it go quickly.
        let (max_connections, idle_timeout) = if config.environment.is_hosted() {
            (1, Duration::from_secs(30))
        } else {
            (10, Duration::from_secs(600))
        };

        Ok(Self {
            options,
            max_connections,
            idle_timeout,
            acquire_timeout: config.db_connect_timeout,
            pool: OnceCell::new(),
        })
    }

    /// Return the memoized pool, connecting and migrating on first use.
    /// Concurrent first callers share one connect attempt.
    pub async fn get_connection(&self) -> Result<&PgPool, sqlx::Error> {
        self.pool.get_or_try_init(|| self.connect()).await
    }

    pub fn is_connected(&self) -> bool {
        self.pool.initialized()
    }

    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            pool.close().await;
            tracing::info!("Database pool closed");
        }
    }

    async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .connect_with(self.options.clone())
            .await
            .inspect_err(|e| tracing::error!("Database connection error: {e}"))?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        tracing::info!(
            max_connections = self.max_connections,
            "Connected to database"
        );
        Ok(pool)
    }
}
