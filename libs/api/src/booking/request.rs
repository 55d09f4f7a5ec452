use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub event_id: i32,
    /// rides along from the widget for log correlation
    #[serde(default)]
    pub slug: String,
    pub email: String,
}
