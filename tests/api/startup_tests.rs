//! Application startup tests

use glow_booking::startup::Application;

use crate::common::test_settings;

#[tokio::test]
async fn test_build_binds_ephemeral_port() {
    let application = Application::build(test_settings(false)).await.unwrap();

    let addr = application.local_addr().unwrap();
    assert!(addr.ip().is_loopback());
    assert_ne!(addr.port(), 0);
}

#[tokio::test]
async fn test_build_with_mail_credentials() {
    // Building the SMTP transport does not connect, so no server is needed
    let application = Application::build(test_settings(true)).await.unwrap();

    assert!(application.local_addr().is_ok());
}
