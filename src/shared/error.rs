//! Application Error Types
//!
//! Centralized error handling with Axum integration. Every failure leaving a
//! handler is rendered as the `{ success, message }` envelope the booking form
//! expects; internal causes are logged and never echoed to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::response::ApiResponse;
use crate::application::services::BookingError;
use crate::domain::services::ValidationError;

pub const MSG_NOT_CONFIGURED: &str = "Email service is not configured. Please contact support.";
pub const MSG_PROCESSING_FAILED: &str =
    "An error occurred while processing your request. Please try again later.";
pub const MSG_RATE_LIMITED: &str = "Too many requests. Please try again later.";
pub const MSG_NOT_FOUND: &str = "Endpoint not found";
pub const MSG_INTERNAL: &str = "Internal server error";
pub const MSG_INVALID_BODY: &str = "Invalid request body";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rate limited")]
    RateLimited,

    #[error("Mail service not configured")]
    NotConfigured,

    #[error("Booking processing failed: {0}")]
    Processing(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NotConfigured => AppError::NotConfigured,
            BookingError::Validation(e) => AppError::Validation(e),
            e @ (BookingError::Delivery { .. } | BookingError::Template(_)) => {
                AppError::Processing(e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, MSG_NOT_FOUND.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, MSG_RATE_LIMITED.to_string()),
            AppError::NotConfigured => {
                tracing::error!("Booking rejected: mail credentials are not configured");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_NOT_CONFIGURED.to_string())
            }
            AppError::Processing(cause) => {
                tracing::error!(error = %cause, "Error processing booking");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_PROCESSING_FAILED.to_string())
            }
            AppError::Internal(cause) => {
                tracing::error!(error = %cause, "Unhandled error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
            }
        };

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}
