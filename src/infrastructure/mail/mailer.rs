//! Mail Sender
//!
//! The `MailSender` trait is the seam between booking orchestration and the
//! outbound transport. `SmtpMailer` implements it over an async SMTP relay
//! (implicit TLS, port 465 by default).

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::MailSettings;

/// A fully composed email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from_name: String,
    pub from_address: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub reply_to: Option<String>,
}

/// Mail delivery errors
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Delivers composed emails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError>;
}

/// SMTP implementation of [`MailSender`].
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build a mailer from settings.
    ///
    /// Returns `Ok(None)` when credentials are absent: the service runs
    /// without mail and rejects bookings instead of failing to start.
    pub fn from_settings(settings: &MailSettings) -> Result<Option<Self>, MailError> {
        let Some((username, password)) = settings.credentials() else {
            return Ok(None);
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.smtp_host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(settings.smtp_port)
            .credentials(Credentials::new(username.to_owned(), password.to_owned()))
            .build();

        Ok(Some(Self { transport }))
    }
}

#[async_trait]
impl MailSender for SmtpMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        let message = build_message(mail)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        tracing::debug!(to = %mail.to, subject = %mail.subject, "Email delivered");
        Ok(())
    }
}

fn parse_mailbox(name: Option<&str>, address: &str) -> Result<Mailbox, MailError> {
    let address_parsed = address.parse().map_err(|e: lettre::address::AddressError| {
        MailError::InvalidAddress {
            address: address.to_owned(),
            reason: e.to_string(),
        }
    })?;
    Ok(Mailbox::new(name.map(str::to_owned), address_parsed))
}

/// Convert an [`OutgoingMail`] into an HTML `lettre` message.
pub fn build_message(mail: &OutgoingMail) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(parse_mailbox(Some(&mail.from_name), &mail.from_address)?)
        .to(parse_mailbox(None, &mail.to)?)
        .subject(mail.subject.as_str())
        .header(ContentType::TEXT_HTML);

    if let Some(reply_to) = &mail.reply_to {
        builder = builder.reply_to(parse_mailbox(None, reply_to)?);
    }

    builder
        .body(mail.html_body.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}
