use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{NewSubmission, Submission};

use super::store::{StoreError, SubmissionStore};

/// In-process store with switchable faults, for exercising the handlers
/// without a database.
#[derive(Default)]
pub struct MemorySubmissionStore {
    rows: RwLock<Vec<Submission>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn insert(&self, new: NewSubmission) -> Result<Submission, StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store is not accepting writes".to_string()));
        }
        let submission = new.into_submission(Uuid::now_v7());
        self.rows.write().await.push(submission.clone());
        Ok(submission)
    }

    async fn list_all(&self) -> Result<Vec<Submission>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store is not accepting reads".to_string()));
        }
        Ok(self.rows.read().await.clone())
    }
}
