//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::SanitizedBooking;
use crate::shared::sanitize::sanitize_value;

/// Booking form submission.
///
/// Fields are kept as raw JSON values: the form is untrusted and a field
/// may be missing or hold a non-string value. Sanitization turns all of
/// those into empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    pub first_name: Option<Value>,
    #[serde(default)]
    pub last_name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub phone: Option<Value>,
    #[serde(default)]
    pub service: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub time: Option<Value>,
    #[serde(default)]
    pub notes: Option<Value>,
}

impl BookingRequest {
    /// Sanitize every field; the email is also lower-cased.
    pub fn sanitize(&self) -> SanitizedBooking {
        SanitizedBooking {
            first_name: sanitize_value(self.first_name.as_ref()),
            last_name: sanitize_value(self.last_name.as_ref()),
            email: sanitize_value(self.email.as_ref()).to_lowercase(),
            phone: sanitize_value(self.phone.as_ref()),
            service: sanitize_value(self.service.as_ref()),
            date: sanitize_value(self.date.as_ref()),
            time: sanitize_value(self.time.as_ref()),
            notes: sanitize_value(self.notes.as_ref()),
        }
    }
}
