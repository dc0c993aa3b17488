use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::db::StoreError;

/// Body returned for every failure whose detail stays server-side.
pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Forbidden(String),
    PayloadTooLarge(String),
    /// Persistence failed while handling a submission.
    Store(StoreError),
    /// Reading submissions failed; the message is returned to the caller.
    Listing(StoreError),
    /// Anything that escaped the handlers.
    Unhandled(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {msg}"),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload Too Large: {msg}"),
            AppError::Store(err) => write!(f, "Store Error: {err}"),
            AppError::Listing(err) => write!(f, "Listing Error: {err}"),
            AppError::Unhandled(msg) => write!(f, "Unhandled Error: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg.clone()),
            AppError::Store(err) => {
                tracing::error!("Error saving form submission: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR.to_string())
            }
            AppError::Listing(err) => {
                tracing::error!("Error fetching submissions: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::Unhandled(msg) => {
                tracing::error!("Unhandled error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR.to_string())
            }
        };

        let body = json!({ "message": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}
