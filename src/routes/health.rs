use axum::Json;
use serde_json::{json, Value};

/// Liveness only; the database is never touched here.
pub async fn health() -> Json<Value> {
    Json(json!({ "message": "Backend server is running" }))
}
