//! Component readiness tests against mock service endpoints.
//!
//! # Invariants
//! - A component that answers with a non-2xx status or unexpected body
//!   fails immediately with `UnexpectedResponse`, never `Unreachable`.
//! - Basic-auth credentials are sent only when both parts are non-empty.

mod common;

use std::time::{Duration, Instant};

use common::*;
use secrecy::SecretString;
use ub_probe::{
    Service, check_connect_ready, check_control_center_ready, check_kafka_rest_ready,
    check_schema_registry_ready,
};
use wiremock::matchers::{basic_auth, method, path};

fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

#[tokio::test]
async fn test_schema_registry_ready() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"compatibilityLevel": "BACKWARD"})),
        )
        .mount(&server)
        .await;

    check_schema_registry_ready(target_for(&server, Duration::from_secs(5)))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_schema_registry_not_found_is_unexpected_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let start = Instant::now();
    let err = check_schema_registry_ready(target_for(&server, Duration::from_secs(10)))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ProbeError::UnexpectedResponse { status: 404, .. }),
        "expected UnexpectedResponse, got {err:?}"
    );
    assert!(!err.is_unreachable());
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_schema_registry_missing_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let err = check_schema_registry_ready(target_for(&server, Duration::from_secs(5)))
        .await
        .unwrap_err();
    assert!(err.is_unexpected_response());
    assert!(err.to_string().contains("compatibilityLevel"));
}

#[tokio::test]
async fn test_kafka_rest_ready() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["_schemas"])))
        .mount(&server)
        .await;

    check_kafka_rest_ready(target_for(&server, Duration::from_secs(5)))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_control_center_ready() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><title>Control Center</title></html>"),
        )
        .mount(&server)
        .await;

    check_control_center_ready(target_for(&server, Duration::from_secs(5)))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_control_center_wrong_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nginx</html>"))
        .mount(&server)
        .await;

    let err = check_control_center_ready(target_for(&server, Duration::from_secs(5)))
        .await
        .unwrap_err();
    assert!(err.is_unexpected_response());
}

#[tokio::test]
async fn test_connect_ready() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "version": "7.6.0-ccs",
            "commit": "1991cb733c81d679",
            "kafka_cluster_id": "abc"
        })))
        .mount(&server)
        .await;

    check_connect_ready(target_for(&server, Duration::from_secs(5)))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_connect_without_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"commit": "x"})))
        .mount(&server)
        .await;

    let err = check_connect_ready(target_for(&server, Duration::from_secs(5)))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("version"));
}

#[tokio::test]
async fn test_basic_auth_sent_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topics"))
        .and(basic_auth("admin", "admin-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let target = target_for(&server, Duration::from_secs(5))
        .credentials(Some("admin".to_string()), Some(secret("admin-secret")));
    Service::KafkaRest.check_ready(target).await.unwrap();
}

#[tokio::test]
async fn test_basic_auth_skipped_with_empty_password() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topics"))
        .and(basic_auth("admin", "admin-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    // Unmatched requests get wiremock's default 404.
    let target = target_for(&server, Duration::from_secs(5))
        .credentials(Some("admin".to_string()), Some(secret("")));
    let err = Service::KafkaRest.check_ready(target).await.unwrap_err();
    assert!(matches!(err, ProbeError::UnexpectedResponse { status: 404, .. }));
}

#[tokio::test]
async fn test_unreachable_component() {
    let target = ProbeTarget::new("127.0.0.1", unused_port(), Duration::from_millis(500))
        .poll_interval(TEST_POLL_INTERVAL);

    let start = Instant::now();
    let err = check_connect_ready(target).await.unwrap_err();
    let elapsed = start.elapsed();

    assert!(
        matches!(err, ProbeError::Unreachable { ref component, .. } if component == "Kafka Connect"),
        "expected Unreachable, got {err:?}"
    );
    assert!(elapsed >= Duration::from_millis(500));
    assert!(elapsed < Duration::from_secs(3));
}

#[tokio::test]
async fn test_slow_component_is_unreachable_within_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let start = Instant::now();
    let err = check_kafka_rest_ready(target_for(&server, Duration::from_millis(500)))
        .await
        .unwrap_err();
    assert!(err.is_unreachable());
    assert!(start.elapsed() < Duration::from_secs(3));
}
