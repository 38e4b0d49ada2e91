//! # Domain Services
//!
//! - **booking_validator**: ordered, short-circuiting booking rules

mod booking_validator;

pub use booking_validator::*;
