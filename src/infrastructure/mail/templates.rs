//! Email templates.
//!
//! Rendered with askama. Templates with an `.html` extension escape every
//! interpolated value, so client-supplied text cannot inject markup even
//! though sanitization only strips angle brackets.

use askama::Template;

use crate::config::ClinicSettings;
use crate::domain::SanitizedBooking;

/// Notification sent to the clinic for each booking.
#[derive(Template)]
#[template(path = "admin_notification.html")]
pub struct AdminNotification<'a> {
    pub booking: &'a SanitizedBooking,
    pub clinic_name: &'a str,
}

/// Confirmation sent to the client.
#[derive(Template)]
#[template(path = "client_confirmation.html")]
pub struct ClientConfirmation<'a> {
    pub booking: &'a SanitizedBooking,
    pub clinic: &'a ClinicSettings,
}
