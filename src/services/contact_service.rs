use crate::dispatch::Dispatcher;
use crate::domain::email::EmailMessage;
use crate::domain::submission::Submission;
use crate::error::{AppError, Result};
use std::sync::Arc;

/// Validates a raw submission, composes the notification email, and relays
/// it through the configured dispatcher.
#[derive(Clone, Debug)]
pub struct ContactService {
    dispatcher: Arc<dyn Dispatcher>,
    operator_address: String,
}

impl ContactService {
    #[must_use]
    pub fn new(dispatcher: Arc<dyn Dispatcher>, operator_address: String) -> Self {
        Self { dispatcher, operator_address }
    }

    /// Runs the full pipeline for one untrusted request body.
    ///
    /// # Errors
    /// Returns `AppError::BadRequest` with the aggregated, order-stable error
    /// list if validation fails, and `AppError::Provider` if the provider
    /// rejects the send or the call itself fails.
    #[tracing::instrument(err(level = "warn"), skip(self, raw_body))]
    pub async fn handle(&self, raw_body: &str) -> Result<()> {
        let submission = Submission::validate(raw_body).map_err(|errors| {
            let joined = errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
            AppError::BadRequest(joined)
        })?;

        let message = EmailMessage::compose(&submission, &self.operator_address)?;

        let outcome = self.dispatcher.send(&message).await?;
        if outcome.accepted {
            tracing::info!("Submission relayed");
            Ok(())
        } else {
            Err(AppError::Provider(format!("provider returned status {}", outcome.status_code)))
        }
    }
}
