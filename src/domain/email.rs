use crate::domain::submission::Submission;
use crate::error::{AppError, Result};
use askama::Template;

pub const SUBJECT: &str = "New Message from your Portfolio Page";

// Askama escapes the interpolated values, so caller-controlled text cannot
// inject markup into the rendered document.
#[derive(Template)]
#[template(path = "contact_email.html")]
struct ContactEmailTemplate<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// An outbound email, ready to hand to a dispatcher.
///
/// The relay both originates and receives the message: `sender` is the
/// provider-verified identity the email is sent as, `recipient` is the
/// mailbox it is delivered to, and both resolve to the operator's configured
/// address. The submitter's own address only ever appears inside the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub html_body: String,
    pub sender: String,
    pub recipient: String,
}

impl EmailMessage {
    /// Renders the fixed notification layout around a validated submission.
    ///
    /// # Errors
    /// Returns `AppError::Internal` if the template fails to render.
    pub fn compose(submission: &Submission, operator_address: &str) -> Result<Self> {
        let template = ContactEmailTemplate {
            name: &submission.name,
            email: &submission.email,
            message: &submission.message,
        };
        let html_body = template.render().map_err(|e| AppError::Internal(format!("template render failed: {e}")))?;

        Ok(Self {
            subject: SUBJECT.to_string(),
            html_body,
            sender: operator_address.to_string(),
            recipient: operator_address.to_string(),
        })
    }
}
