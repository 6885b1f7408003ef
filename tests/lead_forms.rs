use axum::http::StatusCode;

mod common;

use common::{StubAdapter, TestApp};

const ASHA_CONTACT: &[(&str, &str)] = &[
    ("name", "Asha Rao"),
    ("phone", "9876543210"),
    ("email", "asha@example.com"),
    ("service", "invisible-grills"),
    ("message", "Need grills for 3 windows"),
];

const ASHA_QUOTE: &[(&str, &str)] = &[
    ("user_name", "Asha Rao"),
    ("phone_number", "9876543210"),
    ("user_email", ""),
    ("service", "Bird Netting"),
    ("message", ""),
];

fn with(
    form: &[(&'static str, &'static str)],
    name: &str,
    value: &'static str,
) -> Vec<(&'static str, &'static str)> {
    form.iter()
        .map(|&(key, current)| (key, if key == name { value } else { current }))
        .collect()
}

#[tokio::test]
async fn test_contact_submit_delivers_and_clears_form() {
    let app = TestApp::new(StubAdapter::ok());

    let (status, body) = app.post("/contact", ASHA_CONTACT, true).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with(r#"<div id="contact-form""#));
    assert!(body.contains("Message sent successfully!"));
    assert!(!body.contains(r#"value="Asha Rao""#));

    let requests = app.adapter.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].template_id, "template_contact");
    assert_eq!(requests[0].params["name"], "Asha Rao");
    assert_eq!(requests[0].params["service"], "invisible-grills");
    assert_eq!(requests[0].params["message"], "Need grills for 3 windows");
}

#[tokio::test]
async fn test_contact_invalid_phone_keeps_values() {
    let app = TestApp::new(StubAdapter::ok());

    let (status, body) = app
        .post("/contact", &with(ASHA_CONTACT, "phone", "98765432"), true)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Invalid Phone Number"));
    assert!(body.contains(r#"value="98765432""#));
    assert!(body.contains(r#"value="Asha Rao""#));
    assert!(app.adapter.requests().is_empty());
}

#[tokio::test]
async fn test_contact_missing_message_is_rejected() {
    let app = TestApp::new(StubAdapter::ok());

    let (_, body) = app
        .post("/contact", &with(ASHA_CONTACT, "message", "   "), true)
        .await;

    assert!(body.contains("Missing Required Field"));
    assert!(body.contains("Please fill in the Message field."));
    assert!(app.adapter.requests().is_empty());
}

#[tokio::test]
async fn test_contact_unknown_service_is_rejected() {
    let app = TestApp::new(StubAdapter::ok());

    let (_, body) = app
        .post("/contact", &with(ASHA_CONTACT, "service", "Bird Netting"), true)
        .await;

    assert!(body.contains("Invalid Service"));
    assert!(app.adapter.requests().is_empty());
}

#[tokio::test]
async fn test_contact_delivery_failure_hides_provider_text() {
    let app = TestApp::new(StubAdapter::failing(412, "template_contact not found"));

    let (status, body) = app.post("/contact", ASHA_CONTACT, true).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Failed to send message"));
    assert!(!body.contains("not found"));
    assert!(body.contains(r#"value="Asha Rao""#));
    assert_eq!(app.adapter.requests().len(), 1);
}

#[tokio::test]
async fn test_contact_without_script_renders_full_page() {
    let app = TestApp::new(StubAdapter::ok());

    let (status, body) = app.post("/contact", ASHA_CONTACT, false).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Message sent successfully!"));
    assert!(body.contains("Contact Information"));
}

#[tokio::test]
async fn test_quote_popup_partial() {
    let app = TestApp::new(StubAdapter::ok());

    let (status, body) = app.get("/quote").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with(r#"<div id="quote-popup""#));
    assert!(body.contains("Request a Quote"));
    assert!(body.contains(r#"name="user_name""#));
    assert!(body.contains(r#"name="phone_number""#));
    assert!(body.contains(r#"<option value="Mosquito Net">"#));
    assert!(!body.contains("velcro"));
}

#[tokio::test]
async fn test_quote_success_closes_popup() {
    let app = TestApp::new(StubAdapter::ok());

    let (status, body) = app.post("/quote", ASHA_QUOTE, true).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-closed"));
    assert!(body.contains("Quote request submitted!"));
    assert!(!body.contains("<form"));

    let requests = app.adapter.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].template_id, "template_quote");
    assert_eq!(requests[0].params["user_name"], "Asha Rao");
    assert_eq!(requests[0].params["phone_number"], "9876543210");
    assert_eq!(requests[0].params["user_email"], "");
    assert_eq!(requests[0].params["service"], "Bird Netting");
}

#[tokio::test]
async fn test_quote_bad_email_keeps_popup_open() {
    let app = TestApp::new(StubAdapter::ok());

    let (_, body) = app
        .post("/quote", &with(ASHA_QUOTE, "user_email", "not-an-email"), true)
        .await;

    assert!(body.contains("Invalid Email"));
    assert!(body.contains("<form"));
    assert!(body.contains(r#"value="not-an-email""#));
    assert!(app.adapter.requests().is_empty());
}

#[tokio::test]
async fn test_quote_failure_keeps_values_for_retry() {
    let app = TestApp::new(StubAdapter::failing(500, "upstream unavailable"));

    let (_, body) = app.post("/quote", ASHA_QUOTE, true).await;
    assert!(body.contains("There was an error submitting your request. Please try again."));
    assert!(body.contains(r#"value="Asha Rao""#));
    assert!(!body.contains("upstream unavailable"));

    let (_, retry) = app.post("/quote", ASHA_QUOTE, true).await;
    assert!(retry.contains("<form"));
    assert_eq!(app.adapter.requests().len(), 2);
}

#[tokio::test]
async fn test_quote_without_script_renders_full_page() {
    let app = TestApp::new(StubAdapter::ok());

    let (_, body) = app.post("/quote", ASHA_QUOTE, false).await;

    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Quote request submitted!"));
    assert!(body.contains("Back to Home"));
}
