//! Booking entity.
//!
//! A booking request after sanitization. Nothing here is persisted: a
//! booking lives for the duration of one request and ends up in two emails.

use serde::Serialize;

/// A booking whose fields have been sanitized.
///
/// Every field holds at most 1000 characters and contains no `<` or `>`.
/// The email address is lower-cased. `notes` is empty when the client left
/// it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedBooking {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub notes: String,
}

impl SanitizedBooking {
    /// Client's full name as shown in emails and logs.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the client supplied additional notes.
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    /// Whether every required field has content.
    pub fn has_required_fields(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.service,
            &self.date,
            &self.time,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }
}
