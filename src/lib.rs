pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::SubmissionStore;
use crate::middleware::error_boundary::handle_panic;
use crate::middleware::origin_guard::reject_foreign_origins;
use crate::state::{AppState, SharedState};

pub fn build_app(store: Arc<dyn SubmissionStore>, config: Config) -> Router {
    let cors = cors_layer(&config.allowed_origins);
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState { store, config });

    // Layers run bottom-up: tracing sees everything, the origin guard runs
    // before CORS so disallowed preflights never get answered.
    Router::new()
        .merge(routes::form_routes())
        .fallback(routes::not_found)
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            reject_foreign_origins,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Skipping unusable CORS origin '{origin}': {e}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, ACCEPT])
        .allow_credentials(true)
}
