//! Error handling for the race API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use typing_core::TypingError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Typing error: {0}")]
    Typing(#[from] TypingError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Typing(TypingError::InvalidArgument(_)) => {
                (StatusCode::BAD_REQUEST, "invalid_argument")
            }
            ApiError::Typing(TypingError::DataIntegrity(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "data_integrity")
            }
            ApiError::Typing(TypingError::IndexOutOfRange { .. }) => {
                (StatusCode::NOT_FOUND, "index_out_of_range")
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Unprocessable(_) => (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable"),
        };

        tracing::debug!("Rejected request with {}: {}", status, self);

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
