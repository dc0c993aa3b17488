use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub date_time: String,
    pub created_at: DateTime<Utc>,
}

/// A validated submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub date_time: String,
    pub created_at: DateTime<Utc>,
}

impl NewSubmission {
    pub fn into_submission(self, id: Uuid) -> Submission {
        Submission {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
            date_time: self.date_time,
            created_at: self.created_at,
        }
    }
}
