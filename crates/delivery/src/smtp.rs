//! Plain-text delivery to the business inbox over SMTP using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

use crate::{DeliveryAdapter, DeliveryError, DeliveryReceipt, DeliveryRequest};

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default)]
    pub from_address: String,
    /// Inbox receiving the leads
    #[serde(default)]
    pub to_address: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: String::new(),
            to_address: String::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_owned()
}

fn default_smtp_port() -> u16 {
    587
}

#[derive(Clone)]
pub struct SmtpRelay {
    mailer: SmtpTransport,
    from: String,
    to: String,
}

impl SmtpRelay {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "SMTP delivery initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.to_owned(),
            to: config.to_address.to_owned(),
        })
    }

    fn message(&self, request: &DeliveryRequest) -> Result<Message, DeliveryError> {
        let from = self
            .from
            .parse::<Mailbox>()
            .map_err(|err| DeliveryError::transport(format!("invalid from address: {err}")))?;
        let to = self
            .to
            .parse::<Mailbox>()
            .map_err(|err| DeliveryError::transport(format!("invalid to address: {err}")))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(subject(&request.template_id))
            .header(header::ContentType::TEXT_PLAIN)
            .body(plain_body(request))
            .map_err(|err| DeliveryError::transport(err.to_string()))
    }
}

fn subject(template_id: &str) -> String {
    format!("New lead ({template_id})")
}

fn plain_body(request: &DeliveryRequest) -> String {
    request
        .params
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl DeliveryAdapter for SmtpRelay {
    #[tracing::instrument(skip_all, fields(template_id = %request.template_id))]
    async fn send(&self, request: DeliveryRequest) -> Result<DeliveryReceipt, DeliveryError> {
        let message = self.message(&request)?;
        let mailer = self.mailer.clone();

        let response = tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .map_err(|err| DeliveryError::transport(err.to_string()))?
            .map_err(|err| DeliveryError {
                status: err.status().and_then(|code| code.to_string().parse().ok()),
                text: err.to_string(),
            })?;

        tracing::info!("Lead email sent");

        Ok(DeliveryReceipt {
            status: response.code().to_string().parse().unwrap_or_default(),
            text: response
                .message()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        })
    }
}
