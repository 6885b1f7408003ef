#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use moskill::{
    AppState,
    config::{
        Config, DeliveryConfig, FormConfig, FormsConfig, ObservabilityConfig, PopupConfig,
        ServerConfig, SiteConfig,
    },
};
use moskill_delivery::{DeliveryAdapter, DeliveryError, DeliveryReceipt, DeliveryRequest};
use tower::ServiceExt;

/// Records every request and answers with a fixed result
pub struct StubAdapter {
    requests: Mutex<Vec<DeliveryRequest>>,
    failure: Option<DeliveryError>,
}

impl StubAdapter {
    pub fn ok() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            failure: None,
        })
    }

    pub fn failing(status: u16, text: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            failure: Some(DeliveryError {
                status: Some(status),
                text: text.to_owned(),
            }),
        })
    }

    pub fn requests(&self) -> Vec<DeliveryRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeliveryAdapter for StubAdapter {
    async fn send(&self, request: DeliveryRequest) -> Result<DeliveryReceipt, DeliveryError> {
        self.requests.lock().unwrap().push(request);

        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(DeliveryReceipt {
                status: 200,
                text: "OK".to_owned(),
            }),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig::default(),
        delivery: DeliveryConfig::default(),
        forms: FormsConfig {
            contact: FormConfig {
                template_id: "template_contact".to_string(),
            },
            quote: FormConfig {
                template_id: "template_quote".to_string(),
            },
        },
        popup: PopupConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub adapter: Arc<StubAdapter>,
}

impl TestApp {
    pub fn new(adapter: Arc<StubAdapter>) -> Self {
        Self::with_config(test_config(), adapter)
    }

    pub fn with_config(config: Config, adapter: Arc<StubAdapter>) -> Self {
        let state = AppState::new(config, adapter.clone());

        Self {
            router: moskill::routes::router(state),
            adapter,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

        read(self.router.clone().oneshot(request).await.unwrap()).await
    }

    /// Posts a urlencoded body; `partial` sets the header the site script sends
    pub async fn post(
        &self,
        uri: &str,
        form: &[(&str, &str)],
        partial: bool,
    ) -> (StatusCode, String) {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded");

        if partial {
            request = request.header("ts-request", "true");
        }

        let body = serde_urlencoded::to_string(form).unwrap();
        let request = request.body(Body::from(body)).unwrap();

        read(self.router.clone().oneshot(request).await.unwrap()).await
    }
}

async fn read(response: Response<Body>) -> (StatusCode, String) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body.to_vec()).unwrap())
}
