//! EmailJS REST delivery

use std::{collections::BTreeMap, time::Duration};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{DeliveryAdapter, DeliveryError, DeliveryReceipt, DeliveryRequest};

const SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub public_key: String,
    /// Optional private key, sent as `accessToken` when the account enforces it.
    #[serde(default)]
    pub private_key: Option<String>,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            service_id: String::new(),
            public_key: String::new(),
            private_key: None,
        }
    }
}

fn default_endpoint() -> String {
    "https://api.emailjs.com".to_owned()
}

#[derive(Serialize)]
struct SendBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a BTreeMap<String, String>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Delivery through the EmailJS `email/send` endpoint
#[derive(Clone)]
pub struct EmailJs {
    client: reqwest::Client,
    url: String,
    service_id: String,
    public_key: String,
    private_key: Option<String>,
}

impl EmailJs {
    pub fn new(config: &EmailJsConfig, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        tracing::info!(
            endpoint = %config.endpoint,
            service_id = %config.service_id,
            "EmailJS delivery initialized"
        );

        Ok(Self {
            client: builder.build()?,
            url: format!("{}{SEND_PATH}", config.endpoint.trim_end_matches('/')),
            service_id: config.service_id.to_owned(),
            public_key: config.public_key.to_owned(),
            private_key: config.private_key.clone().filter(|key| !key.is_empty()),
        })
    }
}

#[async_trait]
impl DeliveryAdapter for EmailJs {
    #[tracing::instrument(skip_all, fields(template_id = %request.template_id))]
    async fn send(&self, request: DeliveryRequest) -> Result<DeliveryReceipt, DeliveryError> {
        let body = SendBody {
            service_id: &self.service_id,
            template_id: &request.template_id,
            user_id: &self.public_key,
            template_params: &request.params,
            access_token: self.private_key.as_deref(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|err| DeliveryError::transport(err.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| DeliveryError::transport(err.to_string()))?;

        if !status.is_success() {
            return Err(DeliveryError {
                status: Some(status.as_u16()),
                text,
            });
        }

        tracing::debug!(status = status.as_u16(), "EmailJS accepted message");

        Ok(DeliveryReceipt {
            status: status.as_u16(),
            text,
        })
    }
}
