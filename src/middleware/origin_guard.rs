use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::state::SharedState;

/// Turn away cross-origin requests (preflights included) from origins that
/// are not on the allow-list. Requests without an `Origin` header pass.
pub async fn reject_foreign_origins(
    State(state): State<SharedState>,
    req: Request,
    next: Next,
) -> Response {
    let origin = req
        .headers()
        .get(ORIGIN)
        .map(|v| v.to_str().unwrap_or_default().to_string());

    if let Some(origin) = origin {
        if !is_allowed(&origin, &state.config.allowed_origins) {
            tracing::warn!(%origin, "Rejected request from disallowed origin");
            return AppError::Forbidden("Origin not allowed".to_string()).into_response();
        }
    }

    next.run(req).await
}

pub fn is_allowed(origin: &str, allowed: &[String]) -> bool {
    let origin = origin.trim_end_matches('/');
    allowed.iter().any(|a| a == origin)
}
