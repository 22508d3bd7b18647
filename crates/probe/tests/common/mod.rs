//! Common test utilities for probe integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use ub_probe::{ProbeError, ProbeTarget, RetryPolicy};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Polling interval used by tests so deadlines are reached quickly.
#[allow(dead_code)]
pub const TEST_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Probe target pointing at a running mock server.
#[allow(dead_code)]
pub fn target_for(server: &MockServer, timeout: Duration) -> ProbeTarget {
    let addr = server.address();
    ProbeTarget::new(addr.ip().to_string(), addr.port(), timeout).poll_interval(TEST_POLL_INTERVAL)
}

/// A short retry policy for tests.
#[allow(dead_code)]
pub fn fast_policy(timeout: Duration) -> RetryPolicy {
    RetryPolicy::new(timeout).with_interval(TEST_POLL_INTERVAL)
}

/// A localhost port with nothing listening on it.
#[allow(dead_code)]
pub fn unused_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr").port()
}
