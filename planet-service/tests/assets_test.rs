mod common;

use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn landing_page_is_served_unchanged() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.expect("Failed to get response body");
    let on_disk = std::fs::read_to_string("static/index.html").expect("Failed to read asset");
    assert_eq!(body, on_disk);

    app.cleanup().await;
}

#[tokio::test]
async fn api_docs_returns_parsed_openapi_document() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/api-docs", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["openapi"], "3.0.3");
    assert!(body["paths"].get("/planet").is_some());

    app.cleanup().await;
}

#[tokio::test]
async fn missing_api_docs_file_returns_server_error() {
    let app = TestApp::spawn_with(|config| {
        config.assets.api_docs = "does-not-exist.json".to_string();
    })
    .await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/api-docs", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response.status(),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR
    );

    let body = response.text().await.expect("Failed to get response body");
    assert_eq!(body, "Error reading file");

    app.cleanup().await;
}
