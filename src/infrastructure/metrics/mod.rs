//! Prometheus Metrics Module
//!
//! Provides application-wide metrics collection using Prometheus.
//!
//! # Metrics Collected
//! - Accepted bookings
//! - Rejected bookings by validation reason
//! - Requests refused by the rate limiter
//! - Mail delivery failures by pipeline step

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

const NAMESPACE: &str = "glow_booking";

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Bookings that passed validation and were delivered
pub static BOOKINGS_ACCEPTED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::with_opts(
        Opts::new("bookings_accepted_total", "Bookings delivered to clinic and client")
            .namespace(NAMESPACE),
    )
    .expect("Failed to create BOOKINGS_ACCEPTED_TOTAL metric")
});

/// Bookings rejected during validation, by rule class
pub static BOOKINGS_REJECTED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("bookings_rejected_total", "Bookings rejected by validation")
            .namespace(NAMESPACE),
        &["reason"],
    )
    .expect("Failed to create BOOKINGS_REJECTED_TOTAL metric")
});

/// Requests refused by the booking rate limiter
pub static RATE_LIMITED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::with_opts(
        Opts::new("rate_limited_total", "Requests rejected by the rate limiter")
            .namespace(NAMESPACE),
    )
    .expect("Failed to create RATE_LIMITED_TOTAL metric")
});

/// Mail delivery failures, by pipeline step ("admin", "client")
pub static MAIL_FAILURES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("mail_failures_total", "Failed booking email deliveries").namespace(NAMESPACE),
        &["step"],
    )
    .expect("Failed to create MAIL_FAILURES_TOTAL metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(BOOKINGS_ACCEPTED_TOTAL.clone()))
        .expect("Failed to register BOOKINGS_ACCEPTED_TOTAL");
    registry
        .register(Box::new(BOOKINGS_REJECTED_TOTAL.clone()))
        .expect("Failed to register BOOKINGS_REJECTED_TOTAL");
    registry
        .register(Box::new(RATE_LIMITED_TOTAL.clone()))
        .expect("Failed to register RATE_LIMITED_TOTAL");
    registry
        .register(Box::new(MAIL_FAILURES_TOTAL.clone()))
        .expect("Failed to register MAIL_FAILURES_TOTAL");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

pub fn record_booking_accepted() {
    BOOKINGS_ACCEPTED_TOTAL.inc();
}

pub fn record_booking_rejected(reason: &str) {
    BOOKINGS_REJECTED_TOTAL.with_label_values(&[reason]).inc();
}

pub fn record_rate_limited() {
    RATE_LIMITED_TOTAL.inc();
}

pub fn record_mail_failure(step: &str) {
    MAIL_FAILURES_TOTAL.with_label_values(&[step]).inc();
}
