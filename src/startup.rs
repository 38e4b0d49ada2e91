//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::compression::CompressionLayer;

use crate::application::services::{BookingService, BookingServiceImpl, TracingBookingJournal};
use crate::config::Settings;
use crate::infrastructure::cache::{spawn_sweeper, InMemoryRateLimitStore, RateLimitStore};
use crate::infrastructure::mail::{MailSender, SmtpMailer};
use crate::presentation::http::routes;
use crate::presentation::middleware::{
    create_cors_layer, create_trace_layer, FixedWindowRateLimiter, RateLimitConfig,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub booking: Arc<dyn BookingService>,
    pub rate_limiter: Arc<FixedWindowRateLimiter>,
    pub settings: Arc<Settings>,
}

/// Router with every middleware layer applied, without binding a socket.
pub fn build_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings);

    routes::create_router(state)
        .layer(CompressionLayer::new())
        .layer(create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    sweeper: JoinHandle<()>,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let mailer = SmtpMailer::from_settings(&settings.mail)?;
        match &mailer {
            Some(_) => tracing::info!(
                smtp_host = %settings.mail.smtp_host,
                smtp_port = settings.mail.smtp_port,
                "Mail transport configured"
            ),
            None => tracing::warn!(
                "EMAIL_USER / EMAIL_PASS not set; booking requests will be refused"
            ),
        }
        let mailer = mailer.map(|m| Arc::new(m) as Arc<dyn MailSender>);

        let booking = BookingServiceImpl::new(
            mailer,
            settings.mail.clone(),
            settings.clinic.clone(),
            Arc::new(TracingBookingJournal),
        );

        let store: Arc<dyn RateLimitStore> = Arc::new(InMemoryRateLimitStore::new());
        let rate_limiter = Arc::new(FixedWindowRateLimiter::new(
            store.clone(),
            RateLimitConfig::from(&settings.rate_limit),
        ));
        let sweeper = spawn_sweeper(store, settings.rate_limit.sweep_interval());

        let state = AppState {
            booking: Arc::new(booking),
            rate_limiter,
            settings: Arc::new(settings.clone()),
        };

        let router = build_router(state);

        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);
        tracing::info!(
            environment = %settings.environment,
            health = %format!("http://{}/api/health", settings.server_addr()),
            "Health check available"
        );

        Ok(Self {
            listener,
            router,
            sweeper,
        })
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run_until_stopped(self) -> Result<()> {
        let Self {
            listener,
            router,
            sweeper,
        } = self;

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        sweeper.abort();
        tracing::info!("Server stopped");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
