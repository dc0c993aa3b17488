pub mod form;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::error::AppError;
use crate::state::SharedState;

pub fn form_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(health::health))
        .route("/Form", post(form::submit))
        .route("/Display", get(form::display))
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
