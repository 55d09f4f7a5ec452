use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;
use uuid::Uuid;

pub mod request;
pub mod response;

use entity::prelude::*;

use crate::response::IntoApiResponse;
use crate::{ApiError, ApiResponse, ApiState};

use self::request::CreateEventForm;
use self::response::{
    CreateEventResponse, EventResponse, GetEventResponse, GetEventsResponse,
};

/// List all events, newest first
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all events successfully", body = GetEventsResponse)
    )
)]
pub async fn get_events(
    State(state): State<ApiState>,
) -> ApiResponse<Json<GetEventsResponse>> {
    let events = state
        .repo
        .event
        .find_all()
        .await
        .into_response("An unexpected error occurred while listing events")?;

    Ok(Json(GetEventsResponse {
        events: events.into_iter().map(EventResponse::from).collect(),
    }))
}

/// Fetch one event by its slug
#[utoipa::path(
    get,
    path = "/api/events/:slug",
    responses(
        (status = 200, description = "Fetch an event successfully", body = GetEventResponse),
        (status = 404, description = "No event matches the slug")
    ),
    params(
        ("slug", description = "event slug, matched case-insensitively"),
    )
)]
pub async fn get_event(
    State(state): State<ApiState>,
    Path(slug): Path<String>,
) -> ApiResponse<Json<GetEventResponse>> {
    if slug.trim().is_empty() {
        return Err(ApiError::ClientError(
            "Slug parameter is required and must be a non-empty string"
                .to_string(),
        ));
    }

    let slug = entity::event::normalize_slug(&slug);
    let event = state.repo.event.find_by_slug(&slug).await.into_response(
        "An unexpected error occurred while fetching the event",
    )?;

    let Some(event) = event else {
        return Err(ApiError::NotFoundError(format!(
            "Event with slug \"{}\" not found",
            slug
        )));
    };

    Ok(Json(GetEventResponse {
        success: true,
        event: event.into(),
    }))
}

pub async fn create_event(
    State(state): State<ApiState>,
    multipart: Multipart,
) -> ApiResponse<(StatusCode, Json<CreateEventResponse>)> {
    let CreateEventForm {
        title,
        description,
        location,
        date,
        tags,
        agenda,
        image,
    } = CreateEventForm::from_multipart(multipart).await?;

    let slug = entity::event::slugify(&title)
        .into_response("Event creation failed")?;
    if slug.is_empty() {
        return Err(ApiError::FormError(
            "Field \"title\" must contain at least one alphanumeric character"
                .to_string(),
        ));
    }

    let key = format!("events/{}.{}", Uuid::new_v4(), image.extension());
    let image_url = state
        .media
        .upload_image(&key, &image.content_type, image.data)
        .await
        .into_response("Event creation failed")?;

    let event = EventEntity {
        slug,
        title,
        description,
        location,
        date,
        tags,
        agenda,
        image: image_url,
        ..Default::default()
    };

    let created = state
        .repo
        .event
        .create(event)
        .await
        .into_response("Event creation failed")?;

    info!(slug = %created.slug, "event created");

    Ok((
        StatusCode::CREATED,
        Json(CreateEventResponse {
            message: "Event created successfully".to_string(),
            event: created.into(),
        }),
    ))
}
