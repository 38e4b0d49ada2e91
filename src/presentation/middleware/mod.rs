//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod fault;
pub mod logging;
pub mod rate_limit;

pub use cors::create_cors_layer;
pub use fault::handle_panic;
pub use logging::create_trace_layer;
pub use rate_limit::{
    rate_limit_booking, FixedWindowRateLimiter, RateLimitConfig, RateLimitInfo,
};
