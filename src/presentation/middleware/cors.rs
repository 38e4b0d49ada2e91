//! CORS Middleware Configuration

use std::time::Duration;

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::Settings;

/// Create CORS layer from settings.
///
/// Production grants no cross-origin access; the booking form is served
/// from the same origin. Other environments mirror the caller's origin so
/// local front-end dev servers can post with credentials.
pub fn create_cors_layer(settings: &Settings) -> CorsLayer {
    if settings.is_production() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
