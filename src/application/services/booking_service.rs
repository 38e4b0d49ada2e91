//! Booking Service
//!
//! Orchestrates a booking submission: sanitize, validate, compose the two
//! emails, deliver them in order, then record the booking.
//!
//! Delivery is a two-step pipeline. The admin notification goes first; the
//! client confirmation is only attempted once it succeeded. A failure at
//! either step aborts the booking and nothing is retried.

use std::fmt;
use std::sync::Arc;

use askama::Template;
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::application::dto::BookingRequest;
use crate::config::{ClinicSettings, MailSettings};
use crate::domain::services::{validate_booking, ValidationError};
use crate::domain::SanitizedBooking;
use crate::infrastructure::mail::templates::{AdminNotification, ClientConfirmation};
use crate::infrastructure::mail::{MailError, MailSender, OutgoingMail};
use crate::infrastructure::metrics;

/// Booking service trait for dependency injection
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Process one booking form submission.
    async fn submit(&self, request: BookingRequest) -> Result<BookingConfirmation, BookingError>;

    /// Whether outbound mail is available at all.
    fn mail_configured(&self) -> bool;
}

/// Receives every accepted booking. The default journal writes a log line.
pub trait BookingJournal: Send + Sync {
    fn record(&self, confirmation: &BookingConfirmation);
}

/// An accepted, delivered booking.
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    /// Reference for correlating logs with the emails sent
    pub reference: Uuid,
    pub booking: SanitizedBooking,
}

/// Step of the delivery pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStep {
    Admin,
    Client,
}

impl DeliveryStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Client => "client",
        }
    }
}

impl fmt::Display for DeliveryStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking errors
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Mail service is not configured")]
    NotConfigured,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to render email: {0}")]
    Template(#[from] askama::Error),

    #[error("Failed to send {step} email: {source}")]
    Delivery {
        step: DeliveryStep,
        #[source]
        source: MailError,
    },
}

/// Journal that emits one `tracing` event per booking.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBookingJournal;

impl BookingJournal for TracingBookingJournal {
    fn record(&self, confirmation: &BookingConfirmation) {
        let booking = &confirmation.booking;
        tracing::info!(
            reference = %confirmation.reference,
            client = %booking.full_name(),
            service = %booking.service,
            date = %booking.date,
            "Booking received"
        );
    }
}

type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// BookingService implementation
pub struct BookingServiceImpl {
    mailer: Option<Arc<dyn MailSender>>,
    mail_settings: MailSettings,
    clinic: ClinicSettings,
    journal: Arc<dyn BookingJournal>,
    today: Clock,
}

impl BookingServiceImpl {
    /// Create a new BookingServiceImpl.
    ///
    /// `mailer` is `None` when no credentials are configured; every
    /// submission then fails with [`BookingError::NotConfigured`].
    pub fn new(
        mailer: Option<Arc<dyn MailSender>>,
        mail_settings: MailSettings,
        clinic: ClinicSettings,
        journal: Arc<dyn BookingJournal>,
    ) -> Self {
        Self {
            mailer,
            mail_settings,
            clinic,
            journal,
            today: Arc::new(|| Local::now().date_naive()),
        }
    }

    /// Replace the calendar used for the "not in the past" rule.
    pub fn with_clock(mut self, today: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        self.today = Arc::new(today);
        self
    }

    fn sender_address(&self) -> Option<&str> {
        self.mail_settings.credentials().map(|(user, _)| user)
    }

    fn compose_admin_mail(
        &self,
        booking: &SanitizedBooking,
        from: &str,
        admin: &str,
    ) -> Result<OutgoingMail, BookingError> {
        let html_body = AdminNotification {
            booking,
            clinic_name: &self.clinic.name,
        }
        .render()?;

        Ok(OutgoingMail {
            from_name: self.mail_settings.from_name.clone(),
            from_address: from.to_owned(),
            to: admin.to_owned(),
            subject: format!("New Appointment Booking - {}", booking.full_name()),
            html_body,
            reply_to: Some(booking.email.clone()),
        })
    }

    fn compose_client_mail(
        &self,
        booking: &SanitizedBooking,
        from: &str,
    ) -> Result<OutgoingMail, BookingError> {
        let html_body = ClientConfirmation {
            booking,
            clinic: &self.clinic,
        }
        .render()?;

        Ok(OutgoingMail {
            from_name: self.mail_settings.from_name.clone(),
            from_address: from.to_owned(),
            to: booking.email.clone(),
            subject: format!("Appointment Request Confirmation - {}", self.clinic.name),
            html_body,
            reply_to: None,
        })
    }
}

#[async_trait]
impl BookingService for BookingServiceImpl {
    async fn submit(&self, request: BookingRequest) -> Result<BookingConfirmation, BookingError> {
        let (Some(mailer), Some(from), Some(admin)) = (
            self.mailer.as_ref(),
            self.sender_address(),
            self.mail_settings.admin_recipient(),
        ) else {
            return Err(BookingError::NotConfigured);
        };

        let booking = request.sanitize();

        if let Err(e) = validate_booking(&booking, (self.today)()) {
            metrics::record_booking_rejected(e.reason());
            return Err(e.into());
        }

        let pipeline = [
            (DeliveryStep::Admin, self.compose_admin_mail(&booking, from, admin)?),
            (DeliveryStep::Client, self.compose_client_mail(&booking, from)?),
        ];

        for (step, mail) in &pipeline {
            if let Err(source) = mailer.send(mail).await {
                tracing::error!(step = %step, to = %mail.to, error = %source, "Email delivery failed");
                metrics::record_mail_failure(step.as_str());
                return Err(BookingError::Delivery {
                    step: *step,
                    source,
                });
            }
        }

        let confirmation = BookingConfirmation {
            reference: Uuid::new_v4(),
            booking,
        };
        self.journal.record(&confirmation);
        metrics::record_booking_accepted();

        Ok(confirmation)
    }

    fn mail_configured(&self) -> bool {
        self.mailer.is_some() && self.mail_settings.is_configured()
    }
}
