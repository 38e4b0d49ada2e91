//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod booking;
pub mod fallback;
pub mod health;
