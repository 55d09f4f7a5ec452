use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

pub mod request;
pub mod response;

use crate::response::IntoApiResponse;
use crate::{ApiResponse, ApiState};

use self::request::CreateBookingRequest;
use self::response::{BookingResponse, CreateBookingResponse};

/// Server half of the booking widget: the widget keys its submitted state
/// on the success boolean in the envelope.
pub async fn create_booking(
    State(state): State<ApiState>,
    Json(body): Json<CreateBookingRequest>,
) -> ApiResponse<(StatusCode, Json<CreateBookingResponse>)> {
    let booking = state
        .repo
        .booking
        .create(body.event_id, &body.email)
        .await
        .into_response(
            "An unexpected error occurred while creating the booking",
        )?;

    info!(event_id = body.event_id, slug = %body.slug, "event booked");

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            success: true,
            booking: BookingResponse::from(booking),
        }),
    ))
}
