//! Route Configuration
//!
//! Configures all HTTP routes for the booking backend.

use std::path::PathBuf;

use axum::{
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    middleware,
    response::IntoResponse,
    routing::{get, get_service, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::{ServeDir, ServeFile},
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{handle_panic, rate_limit_booking};
use crate::startup::AppState;

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    let static_dir = PathBuf::from(&state.settings.server.static_dir);
    let body_limit = state.settings.server.body_limit_bytes;

    Router::new()
        .nest("/api", api_routes(state.clone()))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        // Booking page and its assets
        .route("/", get_service(ServeFile::new(static_dir.join("index.html"))))
        .nest_service(
            "/static",
            ServeDir::new(&static_dir).not_found_service(handlers::fallback::not_found.into_service()),
        )
        .fallback(handlers::fallback::not_found)
        .method_not_allowed_fallback(handlers::fallback::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        // Outermost of the router's own layers so any handler panic is caught
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// `/api` routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(booking_routes(state))
        .method_not_allowed_fallback(handlers::fallback::not_found)
}

/// Booking submission, rate limited per client
fn booking_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/book-appointment", post(handlers::booking::book_appointment))
        .route_layer(middleware::from_fn_with_state(state, rate_limit_booking))
}
