use crate::domain::email::EmailMessage;
use crate::error::Result;
use async_trait::async_trait;

pub mod ses;

pub use ses::SesDispatcher;

/// What the provider said about a send attempt. Always present: a call that
/// produced no response at all is reported as an error, not an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub accepted: bool,
    pub status_code: u16,
}

/// Capability interface for handing a composed email to a sending provider.
///
/// One attempt per call, no internal retry. Tests substitute a fake.
#[async_trait]
pub trait Dispatcher: Send + Sync + std::fmt::Debug {
    /// Sends one email.
    ///
    /// # Errors
    /// Returns `AppError::Provider` if the provider call fails without
    /// yielding an HTTP response.
    async fn send(&self, message: &EmailMessage) -> Result<DispatchOutcome>;
}
