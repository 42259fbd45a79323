use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body returned for every 500, regardless of the underlying cause. The root
/// cause is logged server-side and never shown to the caller.
pub const SEND_FAILURE_BODY: &str = "Email could not be sent at this time. Please try again later.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Email provider error: {0}")]
    Provider(String),
    #[error("Internal server error")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => {
                tracing::debug!(message = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, format!("Bad request: {msg}"))
            }
            Self::Provider(cause) => {
                tracing::error!(error = %cause, "Email dispatch failed");
                (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILURE_BODY.to_string())
            }
            Self::Internal(cause) => {
                tracing::error!(error = %cause, "Internal server error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILURE_BODY.to_string())
            }
        };

        (status, message).into_response()
    }
}
