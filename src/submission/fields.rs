use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::NewSubmission;

use super::timestamp;

pub const MISSING_FIELDS: &str = "All fields are required.";

/// Raw `POST /Form` body. Every field is optional here so that a missing
/// field surfaces as a validation error rather than a body rejection.
#[derive(Debug, Default, Deserialize)]
pub struct FormPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Check the required fields and stamp the record with its creation time.
pub fn build_submission(
    payload: FormPayload,
    now: DateTime<Utc>,
) -> Result<NewSubmission, &'static str> {
    let (Some(name), Some(email), Some(message)) = (
        present(payload.name),
        present(payload.email),
        present(payload.message),
    ) else {
        return Err(MISSING_FIELDS);
    };

    Ok(NewSubmission {
        name,
        email,
        message,
        date_time: timestamp::display(now),
        created_at: now,
    })
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
