//! # Glow Booking
//!
//! Appointment booking backend for the Glow Beauty Clinic website.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - SMTP transport and rate limiter
//! - HTTP server

use anyhow::Result;
use tracing::info;

use glow_booking::config::Settings;
use glow_booking::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    glow_booking::telemetry::init_tracing();

    info!("Starting Glow Beauty Clinic booking server...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        email_configured = settings.mail.is_configured(),
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
