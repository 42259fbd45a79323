use crate::api::AppState;
use crate::error::Result;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

pub const SEND_SUCCESS_BODY: &str = "Email has been successfully sent.";

/// Accepts a contact-form submission and relays it to the operator.
///
/// The body is taken raw; parsing it is part of validation, so a malformed
/// body is reported as a 400 like any other client error.
///
/// # Errors
/// Returns `AppError::BadRequest` for invalid submissions and
/// `AppError::Provider` if the email cannot be sent.
pub async fn submit(State(state): State<AppState>, body: String) -> Result<impl IntoResponse> {
    state.contact_service.handle(&body).await?;

    Ok((StatusCode::OK, SEND_SUCCESS_BODY))
}

/// Answers the CORS preflight for the submission endpoint.
pub async fn preflight() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
