//! # Domain Layer
//!
//! The booking itself and the rules it must satisfy. Independent of HTTP,
//! mail transport and configuration.
//!
//! - **entities**: `SanitizedBooking`
//! - **services**: booking validation

pub mod entities;
pub mod services;

pub use entities::*;
