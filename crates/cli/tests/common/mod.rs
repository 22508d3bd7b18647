//! Shared test utilities for ub integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//!
//! Invariants / Assumptions:
//! - Credentials and classpath variables from the host never leak into tests.
//! - Polling runs at a short interval so deadline tests finish quickly.

use assert_cmd::Command;

/// Returns a hermetic `ub` command for integration testing.
pub fn ub_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ub");

    cmd.env_remove("UB_USERNAME")
        .env_remove("UB_PASSWORD")
        .env_remove("UB_CLASSPATH")
        .env_remove("CUB_CLASSPATH")
        .env_remove("KAFKA_OPTS")
        .env_remove("RUST_LOG");

    cmd.env("UB_POLL_INTERVAL_MS", "50");

    cmd
}

/// A localhost port with nothing listening on it.
#[allow(dead_code)]
pub fn unused_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr").port()
}
