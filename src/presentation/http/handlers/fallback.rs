//! Fallback Handler

use crate::shared::error::AppError;

/// Any route or method without a handler.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
