use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use entity::prelude::*;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: i32,
    pub event_id: i32,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<BookingEntity> for BookingResponse {
    fn from(value: BookingEntity) -> Self {
        Self {
            id: value.id,
            event_id: value.event_id,
            email: value.email,
            created_at: value.created_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CreateBookingResponse {
    pub success: bool,
    pub booking: BookingResponse,
}
