//! Application settings and configuration structures.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port, static files)
    pub server: ServerSettings,

    /// Outbound mail account
    pub mail: MailSettings,

    /// Clinic details shown in emails
    pub clinic: ClinicSettings,

    /// Booking rate limiting
    pub rate_limit: RateLimitSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,

    /// Directory holding `index.html` and other static assets
    pub static_dir: String,

    /// Maximum accepted request body size in bytes
    pub body_limit_bytes: usize,
}

/// SMTP account used to send booking emails.
///
/// Credentials are optional: without them the server still starts, but
/// every booking fails with a configuration error.
#[derive(Debug, Clone, Deserialize)]
pub struct MailSettings {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub username: Option<String>,
    pub password: Option<String>,

    /// Recipient of admin notifications; defaults to the sending account
    pub admin_address: Option<String>,

    /// Display name on the `From` header
    pub from_name: String,
}

/// Clinic details rendered into client confirmations.
#[derive(Debug, Clone, Deserialize)]
pub struct ClinicSettings {
    pub name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

/// Fixed-window rate limiting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    /// Requests admitted per window and client
    pub max_requests: u32,

    /// Window length in seconds
    pub window_secs: u64,

    /// How often expired entries are swept, in seconds
    pub sweep_interval_secs: u64,

    /// Use X-Forwarded-For / X-Real-IP to identify clients.
    /// Only enable behind a reverse proxy that overwrites these headers.
    pub trust_proxy_headers: bool,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml
    /// 3. config/{RUN_ENV}.toml
    /// 4. `APP__` prefixed environment variables
    /// 5. Plain variables: EMAIL_USER, EMAIL_PASS, ADMIN_EMAIL, HOST, PORT
    ///
    /// The environment label comes from RUN_ENV, then NODE_ENV, then
    /// defaults to `development`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the rate limit is configured with a zero limit or window.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = environment_label(
            std::env::var("RUN_ENV").ok(),
            std::env::var("NODE_ENV").ok(),
        );

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "public")?
            .set_default("server.body_limit_bytes", 10 * 1024 * 1024_i64)? // 10MB
            .set_default("mail.smtp_host", "smtp.gmail.com")?
            .set_default("mail.smtp_port", 465)?
            .set_default("mail.from_name", "Glow Beauty Clinic")?
            .set_default("clinic.name", "Glow Beauty Clinic")?
            .set_default("clinic.contact_phone", "+1 (234) 567-890")?
            .set_default("clinic.contact_email", "appointments@glowbeauty.com")?
            .set_default("rate_limit.max_requests", 5)?
            .set_default("rate_limit.window_secs", 15 * 60)?
            .set_default("rate_limit.sweep_interval_secs", 60)?
            .set_default("rate_limit.trust_proxy_headers", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("HOST").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("mail.username", std::env::var("EMAIL_USER").ok())?
            .set_override_option("mail.password", std::env::var("EMAIL_PASS").ok())?
            .set_override_option("mail.admin_address", std::env::var("ADMIN_EMAIL").ok())?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                settings.rate_limit.check()?;
                Ok(settings)
            })
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

/// First non-empty label wins.
fn environment_label(run_env: Option<String>, node_env: Option<String>) -> String {
    run_env
        .into_iter()
        .chain(node_env)
        .map(|label| label.trim().to_string())
        .find(|label| !label.is_empty())
        .unwrap_or_else(|| "development".into())
}

impl MailSettings {
    /// Username and password, if both are present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => Some((user, pass)),
            _ => None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    /// Admin notification recipient.
    pub fn admin_recipient(&self) -> Option<&str> {
        self.admin_address
            .as_deref()
            .filter(|addr| !addr.is_empty())
            .or(self.username.as_deref())
    }
}

impl RateLimitSettings {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.max_requests == 0 || self.window_secs == 0 {
            return Err(ConfigError::Message(format!(
                "rate_limit.max_requests and rate_limit.window_secs must be positive (got {} and {})",
                self.max_requests, self.window_secs
            )));
        }
        Ok(())
    }
}
