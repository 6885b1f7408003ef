#![allow(dead_code)]

use std::sync::Mutex;

use moskill_delivery::{DeliveryAdapter, DeliveryError, DeliveryReceipt, DeliveryRequest};

/// Records every request and answers with a canned result.
pub struct RecordingAdapter {
    requests: Mutex<Vec<DeliveryRequest>>,
    fail_with: Option<DeliveryError>,
}

impl RecordingAdapter {
    pub fn ok() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    pub fn failing(status: u16, text: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_with: Some(DeliveryError {
                status: Some(status),
                text: text.to_owned(),
            }),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<DeliveryRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DeliveryAdapter for RecordingAdapter {
    async fn send(&self, request: DeliveryRequest) -> Result<DeliveryReceipt, DeliveryError> {
        self.requests.lock().unwrap().push(request);

        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(DeliveryReceipt {
                status: 200,
                text: "OK".to_owned(),
            }),
        }
    }
}
