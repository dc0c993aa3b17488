use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;
use crate::submission::fields::{self, FormPayload, MISSING_FIELDS};

pub async fn submit(
    State(state): State<SharedState>,
    payload: Result<Json<FormPayload>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        // No JSON body at all reads as a form with every field missing.
        Err(JsonRejection::MissingJsonContentType(_)) => FormPayload::default(),
        Err(JsonRejection::JsonDataError(e)) => {
            tracing::debug!("Rejected form payload: {e}");
            return Err(AppError::BadRequest(MISSING_FIELDS.to_string()));
        }
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(AppError::PayloadTooLarge(rejection.body_text()));
        }
        Err(rejection) => return Err(AppError::Unhandled(rejection.body_text())),
    };

    tracing::info!(
        name = ?payload.name,
        email = ?payload.email,
        form_message = ?payload.message,
        "Received form data"
    );

    let new = fields::build_submission(payload, Utc::now())
        .map_err(|msg| AppError::BadRequest(msg.to_string()))?;

    let submission = state.store.insert(new).await?;
    tracing::debug!(id = %submission.id, "Stored form submission");

    Ok(Json(json!({ "message": "Form submitted successfully." })))
}

pub async fn display(State(state): State<SharedState>) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = state.store.list_all().await.map_err(AppError::Listing)?;
    Ok(Json(submissions))
}
