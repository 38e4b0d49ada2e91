//! Booking Handlers

use axum::{extract::State, Json};

use crate::application::dto::{ApiResponse, BookingRequest};
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

pub const MSG_BOOKING_ACCEPTED: &str =
    "Appointment request submitted successfully. We will contact you shortly to confirm.";

/// Submit an appointment request
///
/// The mail configuration is checked before the body is looked at, so a
/// misconfigured server answers 500 regardless of what was posted.
pub async fn book_appointment(
    State(state): State<AppState>,
    body: Result<JsonBody<BookingRequest>, AppError>,
) -> Result<Json<ApiResponse>, AppError> {
    if !state.booking.mail_configured() {
        return Err(AppError::NotConfigured);
    }

    let JsonBody(request) = body?;
    state.booking.submit(request).await?;

    Ok(Json(ApiResponse::success(MSG_BOOKING_ACCEPTED)))
}
