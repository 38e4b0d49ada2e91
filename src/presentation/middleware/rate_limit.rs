//! Rate Limiting Middleware
//!
//! Fixed-window, per-client rate limiting for the booking endpoint.
//!
//! Each client gets `max_requests` requests per window. The window starts
//! at the client's first request and ends `window` later; the first request
//! after that opens a fresh window. Because windows are fixed rather than
//! sliding, a client can get up to twice the limit through by bursting at
//! the end of one window and the start of the next.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};

use crate::config::RateLimitSettings;
use crate::infrastructure::cache::RateLimitStore;
use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::startup::AppState;

// ============================================================================
// Rate Limit Configuration
// ============================================================================

/// Limit and window for one limiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Requests allowed per window
    pub max_requests: u32,
    /// Window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 5,
            window: Duration::from_secs(15 * 60),
        }
    }
}

impl From<&RateLimitSettings> for RateLimitConfig {
    fn from(settings: &RateLimitSettings) -> Self {
        Self {
            max_requests: settings.max_requests,
            window: settings.window(),
        }
    }
}

// ============================================================================
// Rate Limit Response
// ============================================================================

/// Rate limit status reported to clients through response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Maximum requests allowed in the current window
    pub limit: u32,
    /// Remaining requests in the current window
    pub remaining: u32,
    /// Unix timestamp when the window resets
    pub reset_at: i64,
    /// Seconds until the window resets
    pub retry_after: u64,
}

// ============================================================================
// Rate Limiter Implementation
// ============================================================================

/// Fixed-window limiter over a [`RateLimitStore`].
#[derive(Clone)]
pub struct FixedWindowRateLimiter {
    store: Arc<dyn RateLimitStore>,
    config: RateLimitConfig,
}

impl FixedWindowRateLimiter {
    pub fn new(store: Arc<dyn RateLimitStore>, config: RateLimitConfig) -> Self {
        Self { store, config }
    }

    /// Count a request from `identifier`.
    ///
    /// Returns `Ok(RateLimitInfo)` if allowed, `Err(RateLimitInfo)` if rate limited.
    pub async fn check(&self, identifier: &str) -> Result<RateLimitInfo, RateLimitInfo> {
        self.check_at(identifier, Utc::now()).await
    }

    /// [`check`](Self::check) against an explicit clock reading.
    pub async fn check_at(
        &self,
        identifier: &str,
        now: DateTime<Utc>,
    ) -> Result<RateLimitInfo, RateLimitInfo> {
        let entry = self
            .store
            .record_hit(identifier, now, self.config.window)
            .await;

        let retry_ms = (entry.reset_at - now).num_milliseconds().max(0);
        let info = RateLimitInfo {
            limit: self.config.max_requests,
            remaining: self.config.max_requests.saturating_sub(entry.count),
            reset_at: entry.reset_at.timestamp(),
            retry_after: ((retry_ms as f64) / 1000.0).ceil() as u64,
        };

        if entry.count > self.config.max_requests {
            Err(info)
        } else {
            Ok(info)
        }
    }
}

// ============================================================================
// Identifier Extraction
// ============================================================================

/// Extract the rate limit identifier from a request.
///
/// The socket peer address is used unless `trust_proxy_headers` is set, in
/// which case the first `X-Forwarded-For` entry or `X-Real-IP` wins.
fn extract_identifier(request: &Request, trust_proxy_headers: bool) -> String {
    if trust_proxy_headers {
        if let Some(ip) = forwarded_ip(request.headers()) {
            return format!("ip:{}", ip);
        }
    }

    match request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
    {
        Some(ip) => format!("ip:{}", ip),
        None => {
            tracing::warn!("Could not determine client address for rate limiting");
            "ip:unknown".to_string()
        }
    }
}

fn forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    let forwarded_for = headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|ip| ip.trim().parse().ok());

    forwarded_for.or_else(|| {
        headers
            .get("x-real-ip")
            .and_then(|h| h.to_str().ok())
            .and_then(|ip| ip.trim().parse().ok())
    })
}

// ============================================================================
// Middleware Functions
// ============================================================================

/// Rate limiting middleware for the booking endpoint.
pub async fn rate_limit_booking(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let identifier = extract_identifier(&request, state.settings.rate_limit.trust_proxy_headers);

    match state.rate_limiter.check(&identifier).await {
        Ok(info) => {
            let mut response = next.run(request).await;
            add_rate_limit_headers(response.headers_mut(), &info);
            response
        }
        Err(info) => {
            tracing::warn!(identifier = %identifier, "Rate limit exceeded");
            metrics::record_rate_limited();
            create_rate_limit_response(&info)
        }
    }
}

pub const X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
pub const X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
pub const X_RATELIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");

/// Add rate limit headers to a response.
fn add_rate_limit_headers(headers: &mut HeaderMap, info: &RateLimitInfo) {
    headers.insert(X_RATELIMIT_LIMIT, HeaderValue::from(info.limit));
    headers.insert(X_RATELIMIT_REMAINING, HeaderValue::from(info.remaining));
    headers.insert(X_RATELIMIT_RESET, HeaderValue::from(info.reset_at));
}

/// Create a 429 Too Many Requests response.
fn create_rate_limit_response(info: &RateLimitInfo) -> Response {
    let mut response = AppError::RateLimited.into_response();
    add_rate_limit_headers(response.headers_mut(), info);
    response
        .headers_mut()
        .insert(header::RETRY_AFTER, HeaderValue::from(info.retry_after));
    response
}

// ============================================================================
// Tests
// ============================================================================
