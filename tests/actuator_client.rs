use std::time::Duration;

use httpmock::prelude::*;
use nodeboot_admin::client::models::connection::Configuration;
use nodeboot_admin::client::services::actuator_client::ActuatorClient;
use nodeboot_admin::common::endpoints::Endpoint;
use nodeboot_admin::common::errors::FetchError;
use serde_json::{json, Value};

fn config_for(server: &MockServer) -> Configuration {
    Configuration::new(server.base_url(), "/api/v1")
}

#[tokio::test]
async fn health_is_fetched_from_the_root_with_json_accept() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/actuator/health").header("accept", "application/json");
            then.status(200).json_body(json!({"status": "UP"}));
        })
        .await;

    let client = ActuatorClient::new(Duration::from_secs(5));
    let value = client
        .fetch(Some(&config_for(&server)), Endpoint::Health)
        .await
        .expect("health should succeed");

    assert_eq!(value, json!({"status": "UP"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_endpoint_reports_status_code() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/actuator/git");
            then.status(404);
        })
        .await;

    let client = ActuatorClient::new(Duration::from_secs(5));
    let err = client
        .fetch(Some(&config_for(&server)), Endpoint::Git)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Server { status: 404, .. }));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn server_message_field_is_appended() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/actuator/metrics");
            then.status(500).json_body(json!({"message": "registry unavailable"}));
        })
        .await;

    let client = ActuatorClient::new(Duration::from_secs(5));
    let err = client
        .fetch(Some(&config_for(&server)), Endpoint::Metrics)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Server error (500): Internal Server Error - registry unavailable"
    );
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/actuator/info");
            then.status(200).delay(Duration::from_millis(800)).json_body(json!({}));
        })
        .await;

    let client = ActuatorClient::new(Duration::from_millis(100));
    let err = client
        .fetch(Some(&config_for(&server)), Endpoint::Info)
        .await
        .unwrap_err();

    assert_eq!(err, FetchError::Timeout);
    assert!(err.to_string().to_lowercase().contains("timeout"));
}

#[tokio::test]
async fn plain_text_bodies_are_kept_verbatim() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/actuator/prometheus");
            then.status(200).body("jvm_threads_live 12\n");
        })
        .await;

    let client = ActuatorClient::new(Duration::from_secs(5));
    let value = client
        .fetch(Some(&config_for(&server)), Endpoint::Prometheus)
        .await
        .expect("prometheus should succeed");

    assert_eq!(value, Value::String("jvm_threads_live 12\n".to_string()));
}

#[tokio::test]
async fn unreachable_backend_is_a_connectivity_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let base = format!("http://127.0.0.1:{port}");
    let client = ActuatorClient::new(Duration::from_secs(5));
    let err = client
        .fetch(Some(&Configuration::new(base.clone(), "/api")), Endpoint::Health)
        .await
        .unwrap_err();

    assert_eq!(err, FetchError::Connectivity { url: format!("{base}/actuator/health") });
    assert!(err.to_string().contains("Unable to connect"));
}

#[tokio::test]
async fn unconfigured_fetch_never_hits_the_network() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.any_request();
            then.status(200);
        })
        .await;

    let client = ActuatorClient::new(Duration::from_secs(5));
    let err = client.fetch(None, Endpoint::Health).await.unwrap_err();

    assert_eq!(err, FetchError::ConfigurationMissing);
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn api_docs_skip_the_api_prefix() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api-docs/swagger.json");
            then.status(200).json_body(json!({"openapi": "3.0.0", "paths": {}}));
        })
        .await;

    let client = ActuatorClient::new(Duration::from_secs(5));
    let value = client
        .fetch(Some(&config_for(&server)), Endpoint::SwaggerJson)
        .await
        .expect("spec should load");

    assert_eq!(value["openapi"], "3.0.0");
    mock.assert_async().await;
}
