//! Integration tests for the /api/greet endpoint.

mod common;

use common::TestApp;
use greeting_service::dtos::GreetingResponse;
use reqwest::Client;

#[tokio::test]
async fn greet_with_name() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/greet?name=Bob", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: GreetingResponse = response.json().await.expect("Failed to parse response");
    assert_eq!(body.name.as_deref(), Some("Bob"));
    assert_eq!(body.message, "Hello, Bob");
}

#[tokio::test]
async fn greet_without_name() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/greet", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    // The name field must be present as an explicit null, not omitted.
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body.get("name").is_some());
    assert_eq!(body["name"], serde_json::Value::Null);
    assert_eq!(body["message"], "Hello, World");
}

#[tokio::test]
async fn greet_echoes_raw_name_but_trims_message() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/greet?name=%20%20Alice%20%20", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: GreetingResponse = response.json().await.expect("Failed to parse response");
    assert_eq!(body.name.as_deref(), Some("  Alice  "));
    assert_eq!(body.message, "Hello, Alice");
}

#[tokio::test]
async fn greet_with_empty_name() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/greet?name=", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: GreetingResponse = response.json().await.expect("Failed to parse response");
    assert_eq!(body.name.as_deref(), Some(""));
    assert_eq!(body.message, "Hello, World");
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/nope", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn wrong_method_returns_405() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/greet", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 405);
}
