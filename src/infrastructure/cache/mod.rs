//! Cache Module
//!
//! Short-lived counters kept in process memory.
//!
//! # Architecture
//!
//! ```text
//! +------------------------+
//! |  FixedWindowRateLimiter |
//! +------------------------+
//!            |
//!            v
//! +------------------------+
//! |  RateLimitStore trait  |  <-- Abstract interface
//! +------------------------+
//!            |
//!            v
//! +------------------------+
//! | InMemoryRateLimitStore |  <-- DashMap + periodic sweep
//! +------------------------+
//! ```

mod rate_limit_store;

pub use rate_limit_store::{spawn_sweeper, InMemoryRateLimitStore, RateLimitEntry, RateLimitStore};
