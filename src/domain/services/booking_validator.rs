//! Booking validation rules.
//!
//! Rules run in a fixed order and stop at the first violation, so the
//! client always sees a single message naming the rule class that failed.

use chrono::NaiveDate;

use crate::domain::entities::SanitizedBooking;
use crate::shared::validation::{
    is_valid_email, is_valid_phone, is_valid_time, parse_calendar_date,
};

/// A violated booking rule. The display text is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Please select a future date for your appointment")]
    InvalidDate,

    #[error("Please enter a valid time")]
    InvalidTime,
}

impl ValidationError {
    /// Short label used for metrics and logs.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingFields => "missing_fields",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidPhone => "invalid_phone",
            Self::InvalidDate => "invalid_date",
            Self::InvalidTime => "invalid_time",
        }
    }
}

/// Validate a sanitized booking against the calendar day `today`.
///
/// An appointment on `today` itself is accepted.
pub fn validate_booking(booking: &SanitizedBooking, today: NaiveDate) -> Result<(), ValidationError> {
    if !booking.has_required_fields() {
        return Err(ValidationError::MissingFields);
    }

    if !is_valid_email(&booking.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if !is_valid_phone(&booking.phone) {
        return Err(ValidationError::InvalidPhone);
    }

    match parse_calendar_date(&booking.date) {
        Some(date) if date >= today => {}
        _ => return Err(ValidationError::InvalidDate),
    }

    if !is_valid_time(&booking.time) {
        return Err(ValidationError::InvalidTime);
    }

    Ok(())
}
