use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{NewSubmission, Submission};

use super::connection::ConnectionManager;
use super::submissions;

#[derive(Debug)]
pub enum StoreError {
    Connection(sqlx::Error),
    Query(sqlx::Error),
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Connection(err) => write!(f, "Database connection failed: {err}"),
            StoreError::Query(err) => write!(f, "{err}"),
            StoreError::Unavailable(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Append-only persistence for contact form submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn insert(&self, new: NewSubmission) -> Result<Submission, StoreError>;
    async fn list_all(&self) -> Result<Vec<Submission>, StoreError>;
}

/// Postgres-backed store. Each call goes through the connection manager, so
/// the first request after startup opens the pool.
pub struct PgSubmissionStore {
    connections: Arc<ConnectionManager>,
}

impl PgSubmissionStore {
    pub fn new(connections: Arc<ConnectionManager>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn insert(&self, new: NewSubmission) -> Result<Submission, StoreError> {
        let pool = self
            .connections
            .get_connection()
            .await
            .map_err(StoreError::Connection)?;
        submissions::create(pool, &new)
            .await
            .map_err(StoreError::Query)
    }

    async fn list_all(&self) -> Result<Vec<Submission>, StoreError> {
        let pool = self
            .connections
            .get_connection()
            .await
            .map_err(StoreError::Connection)?;
        submissions::list_all(pool).await.map_err(StoreError::Query)
    }
}
