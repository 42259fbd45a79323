use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub mail: MailConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "CONTACT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "CONTACT_PORT", default_value_t = 3000)]
    pub port: u16,
}

#[derive(Clone, Debug, Args)]
pub struct MailConfig {
    /// Mailbox that relayed submissions are delivered to. Because the relay
    /// both originates and receives the email, this address is also used as
    /// the authenticated sender and must be verified with the provider.
    #[arg(long, env = "CONTACT_OPERATOR_ADDRESS")]
    pub operator_address: String,

    /// SES region
    #[arg(long, env = "CONTACT_SES_REGION", default_value = "us-west-2")]
    pub ses_region: String,

    /// Custom SES endpoint (useful for LocalStack)
    #[arg(long, env = "CONTACT_SES_ENDPOINT")]
    pub ses_endpoint: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "CONTACT_LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}
