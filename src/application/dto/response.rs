//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

/// The `{ success, message }` envelope used by every booking API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    /// ISO-8601 timestamp of the check
    pub timestamp: String,
    pub environment: String,
    pub email_configured: bool,
}
