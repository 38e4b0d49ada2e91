//! Application Services
//!
//! Use-case orchestration on top of the domain rules.

mod booking_service;

pub use booking_service::*;
