use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::error;

use repository::RepositoryError;

use crate::ApiError;

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            // the event form reports failures as {"message": ...}
            ApiError::FormError(message) => {
                (StatusCode::BAD_REQUEST, Json(MessageBody { message }))
                    .into_response()
            }
            ApiError::ClientError(error) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    success: false,
                    error,
                }),
            )
                .into_response(),
            ApiError::NotFoundError(error) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    success: false,
                    error,
                }),
            )
                .into_response(),
            ApiError::DuplicateError(error) => (
                StatusCode::CONFLICT,
                Json(ErrorBody {
                    success: false,
                    error,
                }),
            )
                .into_response(),
            ApiError::ServerError(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    success: false,
                    error,
                }),
            )
                .into_response(),
        }
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, message: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for Result<T, RepositoryError> {
    fn into_response(self, message: &str) -> ApiResponse<T> {
        self.map_err(|e| match e {
            RepositoryError::EventNotFound(id) => ApiError::NotFoundError(
                format!("Event with id {} does not exist", id),
            ),
            RepositoryError::InvalidEmail(_) => ApiError::ClientError(
                "Please provide a valid email address".to_string(),
            ),
            RepositoryError::DuplicateBooking { .. } => {
                ApiError::DuplicateError(
                    "A booking already exists for this event and email"
                        .to_string(),
                )
            }
            RepositoryError::InSeaOrmDbErr { .. } => {
                error!("{:?}", e);
                ApiError::ServerError(message.to_string())
            }
        })
    }
}

impl<T> IntoApiResponse<T> for anyhow::Result<T> {
    fn into_response(self, message: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!("{:?}", e);
            ApiError::ServerError(message.to_string())
        })
    }
}
