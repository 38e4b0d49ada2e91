//! Booking rate limit tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{assert_failure, valid_booking, TestApp};

const BOOKING_URI: &str = "/api/book-appointment";

#[tokio::test]
async fn test_sixth_and_seventh_bookings_from_same_client_are_rejected() {
    let app = TestApp::new();
    let body = valid_booking().to_string();

    for _ in 0..5 {
        let response = app.post_json_from(BOOKING_URI, &body, "198.51.100.7").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.post_json_from(BOOKING_URI, &body, "198.51.100.7").await;

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers()["x-ratelimit-remaining"], "0");
    assert!(response.headers().contains_key("retry-after"));
    assert_failure(
        response,
        StatusCode::TOO_MANY_REQUESTS,
        "Too many requests. Please try again later.",
    )
    .await;

    let response = app.post_json_from(BOOKING_URI, &body, "198.51.100.7").await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // Only the five admitted bookings produced mail
    assert_eq!(app.mailer.sent().len(), 10);
}

#[tokio::test]
async fn test_rejected_validation_still_counts_against_limit() {
    let app = TestApp::new();
    let mut booking = valid_booking();
    booking["email"] = json!("broken");
    let body = booking.to_string();

    for _ in 0..5 {
        let response = app.post_json_from(BOOKING_URI, &body, "198.51.100.8").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let response = app.post_json_from(BOOKING_URI, &body, "198.51.100.8").await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_clients_are_limited_independently() {
    let app = TestApp::new();
    let body = valid_booking().to_string();

    for _ in 0..6 {
        app.post_json_from(BOOKING_URI, &body, "198.51.100.9").await;
    }

    let response = app.post_json_from(BOOKING_URI, &body, "198.51.100.10").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_forwarded_header_ignored_when_proxy_not_trusted() {
    let app = TestApp::new();
    let body = valid_booking().to_string();

    for i in 0..5 {
        let response = app
            .send(
                axum::http::Request::builder()
                    .method("POST")
                    .uri(BOOKING_URI)
                    .header("Content-Type", "application/json")
                    .header("X-Forwarded-For", format!("10.0.0.{}", i))
                    .extension(axum::extract::ConnectInfo(std::net::SocketAddr::from((
                        [198, 51, 100, 11],
                        4000,
                    ))))
                    .body(axum::body::Body::from(body.clone()))
                    .unwrap(),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.post_json_from(BOOKING_URI, &body, "198.51.100.11").await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}
