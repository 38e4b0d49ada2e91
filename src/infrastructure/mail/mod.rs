//! Outbound Mail
//!
//! - `mailer`: the `MailSender` seam and its SMTP implementation
//! - `templates`: auto-escaping HTML bodies for booking emails

mod mailer;
pub mod templates;

#[cfg(test)]
pub use mailer::MockMailSender;
pub use mailer::{build_message, MailError, MailSender, OutgoingMail, SmtpMailer};
