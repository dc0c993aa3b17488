use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Panic handler for `CatchPanicLayer`: the client sees the generic error
/// body, the panic payload goes to the log.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Unhandled(format!("handler panicked: {detail}")).into_response()
}
