//! Booking API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use crate::common::{
    assert_failure, body_json, days_from_today, valid_booking, TestApp, ADMIN_ADDRESS,
    SENDER_ADDRESS,
};

const ACCEPTED: &str =
    "Appointment request submitted successfully. We will contact you shortly to confirm.";
const PROCESSING_FAILED: &str =
    "An error occurred while processing your request. Please try again later.";

#[tokio::test]
async fn test_valid_booking_sends_admin_then_client_mail() {
    let app = TestApp::new();

    let response = app.book(&valid_booking()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "success": true, "message": ACCEPTED }));

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 2);

    assert_eq!(sent[0].to, ADMIN_ADDRESS);
    assert_eq!(sent[0].from_address, SENDER_ADDRESS);
    assert_eq!(sent[0].subject, "New Appointment Booking - Jane Doe");
    assert_eq!(sent[0].reply_to.as_deref(), Some("jane.doe@example.com"));
    assert!(sent[0].html_body.contains("Signature Facial"));
    assert!(sent[0].html_body.contains("First visit"));

    assert_eq!(sent[1].to, "jane.doe@example.com");
    assert_eq!(
        sent[1].subject,
        "Appointment Request Confirmation - Glow Beauty Clinic"
    );
    assert_eq!(sent[1].reply_to, None);
}

#[tokio::test]
async fn test_booking_for_today_is_accepted() {
    let app = TestApp::new();
    let mut booking = valid_booking();
    booking["date"] = json!(days_from_today(0));

    let response = app.book(&booking).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.mailer.sent().len(), 2);
}

#[tokio::test]
async fn test_markup_is_stripped_and_email_lowercased() {
    let app = TestApp::new();
    let mut booking = valid_booking();
    booking["firstName"] = json!("  <b>Jane</b>  ");
    booking["email"] = json!("Jane.Doe@Example.COM");
    booking["notes"] = json!("<script>alert(1)</script>");

    let response = app.book(&booking).await;

    assert_eq!(response.status(), StatusCode::OK);
    let sent = app.mailer.sent();
    assert_eq!(sent[0].subject, "New Appointment Booking - bJane/b Doe");
    assert_eq!(sent[1].to, "jane.doe@example.com");
    assert!(!sent[0].html_body.contains("<script>"));
}

#[tokio::test]
async fn test_notes_are_optional() {
    let app = TestApp::new();
    let mut booking = valid_booking();
    booking.as_object_mut().unwrap().remove("notes");

    let response = app.book(&booking).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!app.mailer.sent()[0].html_body.contains("Additional Notes"));
}

#[test_case("firstName", json!(null), "Please fill in all required fields" ; "missing first name")]
#[test_case("lastName", json!("   "), "Please fill in all required fields" ; "blank last name")]
#[test_case("service", json!("<>"), "Please fill in all required fields" ; "service only markup")]
#[test_case("email", json!("not-an-email"), "Please enter a valid email address" ; "malformed email")]
#[test_case("email", json!("a.b@c"), "Please enter a valid email address" ; "email without dot after at")]
#[test_case("phone", json!("0123456789"), "Please enter a valid phone number" ; "phone leading zero")]
#[test_case("phone", json!("12345678901234567"), "Please enter a valid phone number" ; "phone too long")]
#[test_case("date", json!("2020-01-01"), "Please select a future date for your appointment" ; "past date")]
#[test_case("date", json!("next tuesday"), "Please select a future date for your appointment" ; "unparseable date")]
#[test_case("time", json!("24:00"), "Please enter a valid time" ; "hour out of range")]
#[test_case("time", json!("2:30pm"), "Please enter a valid time" ; "twelve hour clock")]
#[tokio::test]
async fn test_invalid_booking_is_rejected(field: &str, value: serde_json::Value, message: &str) {
    let app = TestApp::new();
    let mut booking = valid_booking();
    booking[field] = value;

    let response = app.book(&booking).await;

    assert_failure(response, StatusCode::BAD_REQUEST, message).await;
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_first_failing_rule_wins() {
    let app = TestApp::new();
    let mut booking = valid_booking();
    booking["email"] = json!("broken");
    booking["phone"] = json!("broken");
    booking["time"] = json!("broken");

    let response = app.book(&booking).await;

    assert_failure(
        response,
        StatusCode::BAD_REQUEST,
        "Please enter a valid email address",
    )
    .await;
}

#[tokio::test]
async fn test_non_string_fields_count_as_missing() {
    let app = TestApp::new();
    let mut booking = valid_booking();
    booking["phone"] = json!(12345678);

    let response = app.book(&booking).await;

    assert_failure(
        response,
        StatusCode::BAD_REQUEST,
        "Please fill in all required fields",
    )
    .await;
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/book-appointment", "{\"firstName\": ")
        .await;

    assert_failure(response, StatusCode::BAD_REQUEST, "Invalid request body").await;
}

#[tokio::test]
async fn test_unconfigured_mail_returns_500() {
    let app = TestApp::without_mail();

    let response = app.book(&valid_booking()).await;

    assert_failure(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Email service is not configured. Please contact support.",
    )
    .await;
}

#[tokio::test]
async fn test_unconfigured_mail_checked_before_body() {
    let app = TestApp::without_mail();

    let response = app.post_json("/api/book-appointment", "not json").await;

    assert_failure(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Email service is not configured. Please contact support.",
    )
    .await;
}

#[tokio::test]
async fn test_admin_delivery_failure_skips_client_mail() {
    let app = TestApp::new();
    app.mailer.fail_for(ADMIN_ADDRESS);

    let response = app.book(&valid_booking()).await;

    assert_failure(response, StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_FAILED).await;
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_client_delivery_failure_returns_500_after_admin_mail() {
    let app = TestApp::new();
    app.mailer.fail_for("jane.doe@example.com");

    let response = app.book(&valid_booking()).await;

    assert_failure(response, StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_FAILED).await;
    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, ADMIN_ADDRESS);
}

#[tokio::test]
async fn test_successful_booking_carries_rate_limit_headers() {
    let app = TestApp::new();

    let response = app.book(&valid_booking()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-ratelimit-limit"], "5");
    assert_eq!(response.headers()["x-ratelimit-remaining"], "4");
    assert!(response.headers().contains_key("x-ratelimit-reset"));
}
