use crate::config::MailConfig;
use crate::dispatch::{DispatchOutcome, Dispatcher};
use crate::domain::email::EmailMessage;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use aws_sdk_sesv2::Client;
use aws_sdk_sesv2::error::SdkError;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};

/// Dispatcher backed by Amazon SES.
#[derive(Clone, Debug)]
pub struct SesDispatcher {
    client: Client,
}

impl SesDispatcher {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds an SES client for the configured region, honoring the ambient
    /// AWS credential chain.
    pub async fn from_config(config: &MailConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.ses_region.clone()));
        if let Some(endpoint) = &config.ses_endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl Dispatcher for SesDispatcher {
    async fn send(&self, message: &EmailMessage) -> Result<DispatchOutcome> {
        let subject = Content::builder()
            .data(&message.subject)
            .build()
            .map_err(|e| AppError::Internal(format!("invalid subject content: {e}")))?;
        let html = Content::builder()
            .data(&message.html_body)
            .build()
            .map_err(|e| AppError::Internal(format!("invalid body content: {e}")))?;
        let content = Message::builder()
            .subject(subject)
            .body(Body::builder().html(html).build())
            .build();

        let request = self
            .client
            .send_email()
            .from_email_address(&message.sender)
            .destination(Destination::builder().to_addresses(&message.recipient).build())
            .content(EmailContent::builder().simple(content).build());

        match request.send().await {
            Ok(output) => {
                tracing::info!(message_id = ?output.message_id(), "Email accepted by SES");
                Ok(DispatchOutcome { accepted: true, status_code: 200 })
            }
            Err(SdkError::ServiceError(err)) => {
                let status_code = err.raw().status().as_u16();
                tracing::warn!(status = status_code, error = ?err.err(), "SES rejected send");
                Ok(DispatchOutcome { accepted: false, status_code })
            }
            Err(e) => Err(AppError::Provider(format!("SES call failed: {e}"))),
        }
    }
}
