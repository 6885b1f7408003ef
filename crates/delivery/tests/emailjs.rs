use std::collections::BTreeMap;

use httpmock::prelude::*;
use moskill_delivery::{DeliveryAdapter, DeliveryRequest, EmailJs, EmailJsConfig};

fn config(endpoint: String) -> EmailJsConfig {
    EmailJsConfig {
        endpoint,
        service_id: "service_moskill".to_owned(),
        public_key: "pk_test".to_owned(),
        private_key: None,
    }
}

fn request() -> DeliveryRequest {
    DeliveryRequest {
        template_id: "template_quote".to_owned(),
        params: BTreeMap::from([
            ("user_name".to_owned(), "Asha Rao".to_owned()),
            ("phone_number".to_owned(), "9876543210".to_owned()),
            ("user_email".to_owned(), String::new()),
            ("service".to_owned(), "Bird Netting".to_owned()),
            ("message".to_owned(), String::new()),
        ]),
    }
}

#[tokio::test]
async fn test_send_posts_template_params() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1.0/email/send")
                .json_body(serde_json::json!({
                    "service_id": "service_moskill",
                    "template_id": "template_quote",
                    "user_id": "pk_test",
                    "template_params": {
                        "user_name": "Asha Rao",
                        "phone_number": "9876543210",
                        "user_email": "",
                        "service": "Bird Netting",
                        "message": ""
                    }
                }));
            then.status(200).body("OK");
        })
        .await;

    let adapter = EmailJs::new(&config(server.base_url()), None)?;
    let receipt = adapter.send(request()).await?;

    mock.assert_async().await;
    assert_eq!(receipt.status, 200);
    assert_eq!(receipt.text, "OK");

    Ok(())
}

#[tokio::test]
async fn test_send_includes_access_token_when_configured() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1.0/email/send")
                .json_body_partial(r#"{ "accessToken": "secret_token" }"#);
            then.status(200).body("OK");
        })
        .await;

    let adapter = EmailJs::new(
        &EmailJsConfig {
            private_key: Some("secret_token".to_owned()),
            ..config(server.base_url())
        },
        None,
    )?;
    adapter.send(request()).await?;

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_provider_rejection_keeps_status_and_text() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1.0/email/send");
            then.status(400)
                .body("The Public Key is invalid or non-specified");
        })
        .await;

    let adapter = EmailJs::new(&config(server.base_url()), None)?;
    let err = adapter.send(request()).await.unwrap_err();

    mock.assert_hits_async(1).await;
    assert_eq!(err.status, Some(400));
    assert_eq!(err.text, "The Public Key is invalid or non-specified");

    Ok(())
}

#[tokio::test]
async fn test_unreachable_provider_is_transport_error() -> anyhow::Result<()> {
    let adapter = EmailJs::new(&config("http://127.0.0.1:9".to_owned()), None)?;
    let err = adapter.send(request()).await.unwrap_err();

    assert_eq!(err.status, None);
    assert!(!err.text.is_empty());

    Ok(())
}
