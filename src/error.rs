//! Application error taxonomy and HTTP mapping.
//!
//! Every handler-level failure is translated into a JSON `{"error": ...}`
//! body with the matching status code. Internal failures are logged and
//! return a generic message only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dtos::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // Validation and uniqueness conflicts are both client errors
            AppError::Validation(msg) | AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong!".to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong!".to_string(),
                )
            }
            AppError::Config(msg) => {
                tracing::error!(error = %msg, "Configuration failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong!".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
