//! Fallback, static file and metrics routing tests

use std::sync::Arc;

use axum::{body::Body, http::{Request, StatusCode}};

use crate::common::{assert_failure, valid_booking, PanickingBookingService, TestApp};

#[tokio::test]
async fn test_unknown_path_returns_json_404() {
    let app = TestApp::new();

    let response = app.get("/api/unknown").await;

    assert_failure(response, StatusCode::NOT_FOUND, "Endpoint not found").await;
}

#[tokio::test]
async fn test_unknown_top_level_path_returns_json_404() {
    let app = TestApp::new();

    let response = app.get("/wp-login.php").await;

    assert_failure(response, StatusCode::NOT_FOUND, "Endpoint not found").await;
}

#[tokio::test]
async fn test_wrong_method_on_booking_returns_404() {
    let app = TestApp::new();

    let response = app.get("/api/book-appointment").await;

    assert_failure(response, StatusCode::NOT_FOUND, "Endpoint not found").await;
}

#[tokio::test]
async fn test_index_page_is_served() {
    let app = TestApp::new();

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_static_asset_is_served() {
    let app = TestApp::new();

    let response = app.get("/static/styles.css").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_static_asset_returns_json_404() {
    let app = TestApp::new();

    let response = app.get("/static/missing.js").await;

    assert_failure(response, StatusCode::NOT_FOUND, "Endpoint not found").await;
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_prometheus_text() {
    let app = TestApp::new();

    let response = app
        .send(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn test_handler_panic_returns_generic_500() {
    let app = TestApp::with_booking_service(Arc::new(PanickingBookingService));

    let response = app.book(&valid_booking()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "success": false, "message": "Internal server error" })
    );
    assert!(!String::from_utf8_lossy(&bytes).contains("hunter2"));
}

#[tokio::test]
async fn test_server_keeps_serving_after_handler_panic() {
    let app = TestApp::with_booking_service(Arc::new(PanickingBookingService));

    app.book(&valid_booking()).await;
    let response = app.get("/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);
}
