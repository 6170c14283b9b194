use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    #[error("database unavailable: {0}")]
    Unavailable(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// A single field-level validation failure, surfaced to the client.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ValidationResponse {
    message: &'static str,
    errors: Vec<FieldError>,
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        match self {
            IntakeError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationResponse {
                    message: "Validation error",
                    errors,
                }),
            )
                .into_response(),
            IntakeError::Unavailable(cause) => {
                error!("Database unavailable: {}", cause);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(MessageResponse {
                        message: "Service unavailable",
                    }),
                )
                    .into_response()
            }
            // Internal causes are logged server-side only, never sent to the client.
            IntakeError::Storage(cause) | IntakeError::Internal(cause) => {
                error!("Internal error: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse {
                        message: "Internal server error",
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<tokio_postgres::Error> for IntakeError {
    fn from(err: tokio_postgres::Error) -> Self {
        IntakeError::Storage(err.to_string())
    }
}

impl From<deadpool_postgres::PoolError> for IntakeError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        match err {
            // A full wait queue is backpressure, not a server fault.
            deadpool_postgres::PoolError::Timeout(_) => {
                IntakeError::Unavailable("connection pool wait timed out".to_string())
            }
            other => IntakeError::Storage(format!("Pool error: {}", other)),
        }
    }
}

pub type Result<T> = std::result::Result<T, IntakeError>;
