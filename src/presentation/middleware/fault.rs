//! Global Fault Boundary
//!
//! Converts a panic inside any handler into the generic 500 envelope. The
//! panic payload is logged and never sent to the client.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::shared::error::AppError;

/// Panic handler for `tower_http::catch_panic::CatchPanicLayer`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("handler panicked: {}", details)).into_response()
}
