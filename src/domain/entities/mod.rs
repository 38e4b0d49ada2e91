//! # Domain Entities
//!
//! - **SanitizedBooking**: an appointment request after input sanitization

mod booking;

#[cfg(test)]
pub(crate) use booking::fixtures;
pub use booking::SanitizedBooking;
