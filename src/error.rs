use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{CardId, ErrorResponse, Rank, Suit, ValidationErrorResponse};

#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("Card already exists: {value} of {suit}")]
    Duplicate { suit: Suit, value: Rank },

    #[error("Card not found: {0}")]
    NotFound(CardId),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced at the HTTP boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    #[error("Duplicate suit and value")]
    Conflict,

    #[error("Card not found")]
    NotFound,

    #[error("Invalid id parameter")]
    InvalidIdentifier,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidIdentifier => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { .. } => ApiError::Conflict,
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::Unavailable(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::ValidationFailed(errors) => {
                (status, Json(ValidationErrorResponse { errors })).into_response()
            }
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                internal_error_response()
            }
            ApiError::Conflict => {
                error_body(status, "Card with same suit and value already exists.")
            }
            ApiError::NotFound => error_body(status, "Card not found."),
            ApiError::InvalidIdentifier => error_body(status, "Invalid id parameter."),
        }
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Opaque 500 body. Never carries detail.
pub fn internal_error_response() -> Response {
    error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}
