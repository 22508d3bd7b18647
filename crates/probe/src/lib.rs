//! Readiness probes for containerized services.
//!
//! Probes wait for a TCP port to accept connections, for a URL to answer
//! HTTP 200, or for a known component endpoint to return the content that
//! marks it ready. All waits are bounded by a [`RetryPolicy`].

pub mod auth;
pub mod checker;
pub mod client;
pub mod descriptor;
pub mod error;
pub mod retry;
pub mod services;

pub use auth::BasicAuth;
pub use checker::{check_component_ready, wait_for_http, wait_for_server};
pub use client::{ProbeClient, ProbeClientBuilder, ProbeResponse};
pub use descriptor::{Expectation, ProbeDescriptor, ProbeTarget, parse_port, parse_timeout_secs};
pub use error::{ProbeError, Result};
pub use retry::{Attempt, PollError, RetryPolicy, poll_until};
pub use services::{
    Service, check_connect_ready, check_control_center_ready, check_kafka_rest_ready,
    check_schema_registry_ready,
};
