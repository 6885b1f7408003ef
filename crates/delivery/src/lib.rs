mod emailjs;
mod smtp;

pub use emailjs::*;
pub use smtp::*;

use std::collections::BTreeMap;

use async_trait::async_trait;

/// A validated lead ready to be rendered by the provider.
///
/// `params` are keyed by the input names the form binds each field to, which
/// are also the variable names the provider template expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub template_id: String,
    pub params: BTreeMap<String, String>,
}

/// Provider reference returned for an accepted send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("delivery failed ({}): {text}", status_label(.status))]
pub struct DeliveryError {
    /// Provider status, `None` when the request never got a response.
    pub status: Option<u16>,
    pub text: String,
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(status) => status.to_string(),
        None => "transport".to_owned(),
    }
}

impl DeliveryError {
    pub fn transport(text: impl Into<String>) -> Self {
        Self {
            status: None,
            text: text.into(),
        }
    }
}

/// Sends one lead per call. Implementations never retry.
#[async_trait]
pub trait DeliveryAdapter: Send + Sync {
    async fn send(&self, request: DeliveryRequest) -> Result<DeliveryReceipt, DeliveryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_status_or_transport() {
        let err = DeliveryError {
            status: Some(400),
            text: "The Public Key is invalid".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "delivery failed (400): The Public Key is invalid"
        );

        let err = DeliveryError::transport("connection refused");
        assert_eq!(
            err.to_string(),
            "delivery failed (transport): connection refused"
        );
    }
}
