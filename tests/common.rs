#![allow(dead_code, clippy::unwrap_used, clippy::panic, missing_debug_implementations)]

use async_trait::async_trait;
use contact_relay::api::{self, AppState};
use contact_relay::dispatch::{DispatchOutcome, Dispatcher};
use contact_relay::domain::email::EmailMessage;
use contact_relay::error::{AppError, Result};
use contact_relay::services::contact_service::ContactService;
use std::sync::{Arc, Mutex, Once};

pub const OPERATOR_ADDRESS: &str = "operator@example.com";

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("contact_relay=debug".parse().unwrap())
            .add_directive("tower=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

/// How the fake provider reacts to a send.
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    Accept,
    Reject(u16),
    Fail,
}

/// In-memory stand-in for SES: records every message and reacts per the
/// configured behavior.
#[derive(Debug)]
pub struct FakeDispatcher {
    behavior: Behavior,
    pub sent: Mutex<Vec<EmailMessage>>,
}

impl FakeDispatcher {
    pub const fn new(behavior: Behavior) -> Self {
        Self { behavior, sent: Mutex::new(Vec::new()) }
    }

    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dispatcher for FakeDispatcher {
    async fn send(&self, message: &EmailMessage) -> Result<DispatchOutcome> {
        self.sent.lock().unwrap().push(message.clone());
        match self.behavior {
            Behavior::Accept => Ok(DispatchOutcome { accepted: true, status_code: 200 }),
            Behavior::Reject(status_code) => Ok(DispatchOutcome { accepted: false, status_code }),
            Behavior::Fail => Err(AppError::Provider("dispatch timeout: connection reset by peer".to_string())),
        }
    }
}

pub struct TestApp {
    pub server_url: String,
    pub client: reqwest::Client,
    pub dispatcher: Arc<FakeDispatcher>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(Behavior::Accept).await
    }

    pub async fn spawn_with(behavior: Behavior) -> Self {
        setup_tracing();

        let dispatcher = Arc::new(FakeDispatcher::new(behavior));
        let contact_service =
            ContactService::new(Arc::clone(&dispatcher) as Arc<dyn Dispatcher>, OPERATOR_ADDRESS.to_string());
        let app = api::app_router(AppState { contact_service });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind test listener");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server crashed");
        });

        Self { server_url: format!("http://{addr}"), client: reqwest::Client::new(), dispatcher }
    }

    pub async fn post_contact(&self, body: impl Into<reqwest::Body>) -> reqwest::Response {
        self.client
            .post(format!("{}/contact", self.server_url))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn assert_cors_headers(response: &reqwest::Response) {
    assert_eq!(
        response.headers().get("access-control-allow-origin").map(|v| v.to_str().unwrap()),
        Some("*"),
        "missing or wrong Access-Control-Allow-Origin"
    );
    assert_eq!(
        response.headers().get("access-control-allow-credentials").map(|v| v.to_str().unwrap()),
        Some("true"),
        "missing or wrong Access-Control-Allow-Credentials"
    );
}
