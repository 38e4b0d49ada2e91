//! Infrastructure Layer
//!
//! Implementations of the collaborators the booking flow depends on:
//! SMTP delivery, in-memory rate-limit counters and Prometheus metrics.

pub mod cache;
pub mod mail;
pub mod metrics;
