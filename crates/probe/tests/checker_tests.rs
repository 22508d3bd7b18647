//! TCP and plain HTTP readiness tests.
//!
//! # Invariants
//! - A closed port is reported only after the full timeout has elapsed.
//! - A port that starts listening mid-wait is reported promptly.
//! - `wait_for_http` requires exactly HTTP 200.

mod common;

use std::time::{Duration, Instant};

use common::*;
use tokio::net::TcpListener;
use ub_probe::{wait_for_http, wait_for_server};
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_wait_for_server_listening() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let start = Instant::now();
    assert!(wait_for_server("127.0.0.1", port, fast_policy(Duration::from_secs(5))).await);
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_wait_for_server_closed_port_waits_full_timeout() {
    let port = unused_port();
    let timeout = Duration::from_millis(500);

    let start = Instant::now();
    assert!(!wait_for_server("127.0.0.1", port, fast_policy(timeout)).await);
    let elapsed = start.elapsed();
    assert!(elapsed >= timeout, "returned early after {elapsed:?}");
    assert!(elapsed < Duration::from_secs(3));
}

#[tokio::test]
async fn test_wait_for_server_becomes_available() {
    let port = unused_port();

    let server = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        let listener = TcpListener::bind(("127.0.0.1", port)).await.unwrap();
        let _ = listener.accept().await;
    });

    let start = Instant::now();
    assert!(wait_for_server("127.0.0.1", port, fast_policy(Duration::from_secs(10))).await);
    assert!(start.elapsed() < Duration::from_secs(5));
    server.abort();
}

#[tokio::test]
async fn test_wait_for_http_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let url = format!("{}/health", server.uri());
    wait_for_http(&url, fast_policy(Duration::from_secs(5)))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_wait_for_http_non_200_reports_last_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let url = format!("{}/health", server.uri());
    let err = wait_for_http(&url, fast_policy(Duration::from_millis(300)))
        .await
        .unwrap_err();

    match &err {
        ProbeError::DeadlineExceeded { last, .. } => {
            assert!(
                matches!(**last, ProbeError::UnexpectedStatus { status: 503, .. }),
                "unexpected last error: {last:?}"
            );
        }
        other => panic!("expected DeadlineExceeded, got {other:?}"),
    }
    assert!(err.is_unexpected_response());
}

#[tokio::test]
async fn test_wait_for_http_requires_exactly_200() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = wait_for_http(&server.uri(), fast_policy(Duration::from_millis(200)))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("HTTP 204"));
}

#[tokio::test]
async fn test_wait_for_http_connection_refused() {
    let url = format!("http://127.0.0.1:{}/", unused_port());
    let timeout = Duration::from_millis(400);

    let start = Instant::now();
    let err = wait_for_http(&url, fast_policy(timeout)).await.unwrap_err();
    assert!(start.elapsed() >= timeout);
    assert!(err.is_unreachable(), "expected unreachable, got {err:?}");
}

#[tokio::test]
async fn test_wait_for_http_invalid_url_fails_fast() {
    let start = Instant::now();
    let err = wait_for_http("not a url", fast_policy(Duration::from_secs(5)))
        .await
        .unwrap_err();
    assert!(matches!(err, ProbeError::InvalidUrl(_)));
    assert!(start.elapsed() < Duration::from_secs(1));
}
