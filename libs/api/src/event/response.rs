use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use entity::prelude::*;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub tags: Vec<String>,
    pub agenda: Vec<String>,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

impl From<EventEntity> for EventResponse {
    fn from(value: EventEntity) -> Self {
        Self {
            id: value.id,
            slug: value.slug,
            title: value.title,
            description: value.description,
            location: value.location,
            date: value.date,
            tags: value.tags,
            agenda: value.agenda,
            image: value.image,
            created_at: value.created_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetEventsResponse {
    pub events: Vec<EventResponse>,
}

#[derive(Serialize, ToSchema)]
pub struct GetEventResponse {
    pub success: bool,
    pub event: EventResponse,
}

#[derive(Serialize, ToSchema)]
pub struct CreateEventResponse {
    pub message: String,
    pub event: EventResponse,
}
