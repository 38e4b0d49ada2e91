//! Health Check Handler
//!
//! `GET /api/health` reports whether the process is up and whether mail
//! credentials are present. It never fails: a missing mail configuration is
//! reported, not treated as unhealthy.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};

use crate::application::dto::HealthResponse;
use crate::config::Settings;
use crate::startup::AppState;

/// Build the health snapshot for the given settings.
pub fn health_snapshot(settings: &Settings) -> HealthResponse {
    HealthResponse {
        success: true,
        message: format!("{} Backend is running", settings.clinic.name),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        environment: settings.environment.clone(),
        email_configured: settings.mail.is_configured(),
    }
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(health_snapshot(&state.settings))
}
