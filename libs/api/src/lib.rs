use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use toml::Value;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};

use repository::Repository;
use util::load_config;

pub mod booking;
mod clients;
pub mod event;
pub mod healthz;
pub mod not_found;
mod response;

pub use response::ApiResponse;

pub enum ApiError {
    FormError(String),
    ClientError(String),
    NotFoundError(String),
    DuplicateError(String),
    ServerError(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    repo: Repository,
    media: clients::media::Client,
}

pub async fn serve(
    repository: Repository,
    s3: aws_sdk_s3::Client,
    bucket: String,
    config_name: &str,
) -> anyhow::Result<Router> {
    #[derive(OpenApi)]
    #[openapi(
        paths(event::get_events, event::get_event),
        components(schemas(
            event::response::EventResponse,
            event::response::GetEventsResponse,
            event::response::GetEventResponse,
        ))
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    let config = load_config(config_name)?;
    let public_url = config
        .get("media")
        .and_then(|media| media.get("public_url"))
        .and_then(Value::as_str)
        .context("media.public_url missing from config")?
        .to_string();

    let media = clients::media::Client::new(s3, bucket, public_url);

    let state = ApiState {
        repo: repository,
        media,
    };

    let origins: [HeaderValue; 1] = ["http://localhost:3000".parse()?];

    // events
    let event_router = Router::new()
        .route("/", get(event::get_events).post(event::create_event))
        .route("/:slug", get(event::get_event))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // bookings
    let booking_router = Router::new()
        .route("/", post(booking::create_booking))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    let api_doc = ApiDoc::openapi();
    let openapi_json = api_doc.clone();

    let router = Router::new()
        .merge(Redoc::with_url("/redoc", api_doc))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route(
            "/api-docs/openapi.json",
            get(move || async move { Json(openapi_json) }),
        )
        .route("/healthz", get(healthz::get_health))
        .nest("/api/events", event_router)
        .nest("/api/bookings", booking_router)
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .fallback(not_found::get_404);

    Ok(router)
}
