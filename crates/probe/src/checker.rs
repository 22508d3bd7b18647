//! Readiness checks: TCP reachability, plain HTTP, and component endpoints.
//!
//! Responsibilities:
//! - Poll a TCP port until a connection is accepted.
//! - Poll a URL until it answers HTTP 200.
//! - Poll a component endpoint and validate its response.
//!
//! Does NOT handle:
//! - Per-service endpoints and expected content (see [`crate::services`]).
//! - Argument parsing (see [`crate::descriptor::ProbeTarget::parse`]).
//!
//! Invariants:
//! - Transport failures and per-attempt timeouts are retried until the
//!   deadline; a component that answers with the wrong thing fails at once.
//! - Every connection opened by a probe is closed before it returns.

use tokio::net::TcpStream;

use crate::client::ProbeClient;
use crate::descriptor::ProbeDescriptor;
use crate::error::{ProbeError, Result};
use crate::retry::{Attempt, MIN_ATTEMPT_BUDGET, PollError, RetryPolicy, poll_until};

/// Wait until `host:port` accepts a TCP connection.
///
/// Returns `true` as soon as a connection succeeds and `false` once the
/// policy's deadline passes without one.
pub async fn wait_for_server(host: &str, port: u16, policy: RetryPolicy) -> bool {
    let addr = socket_addr(host, port);
    let addr = addr.as_str();

    let outcome = poll_until(policy, move |budget| async move {
        match tokio::time::timeout(budget, TcpStream::connect(addr)).await {
            Ok(Ok(_stream)) => Attempt::Ready(()),
            Ok(Err(e)) => Attempt::NotYet(e.to_string()),
            Err(_) => Attempt::NotYet(format!("connect timed out after {budget:?}")),
        }
    })
    .await;

    match outcome {
        Ok(()) => {
            tracing::info!(addr, "Server is accepting connections");
            true
        }
        Err(PollError::Exhausted { attempts, last }) => {
            tracing::warn!(
                addr,
                attempts,
                error = %last,
                timeout = ?policy.timeout(),
                "Server did not accept connections before the deadline"
            );
            false
        }
        Err(PollError::Fatal(last)) => {
            tracing::warn!(addr, error = %last, "Server check failed");
            false
        }
    }
}

/// Wait until `url` answers HTTP 200.
///
/// # Errors
///
/// Returns [`ProbeError::InvalidUrl`] immediately for a malformed URL, and
/// [`ProbeError::DeadlineExceeded`] carrying the last failure (a non-200
/// status or a transport error) once the deadline passes.
pub async fn wait_for_http(url: &str, policy: RetryPolicy) -> Result<()> {
    let client = ProbeClient::builder()
        .base_url(url)
        .timeout(policy.timeout().max(MIN_ATTEMPT_BUDGET))
        .build()?;
    let client = &client;

    let outcome = poll_until(policy, move |budget| async move {
        match tokio::time::timeout(budget, client.get("")).await {
            Err(_) => Attempt::NotYet(ProbeError::Timeout(budget)),
            Ok(Err(e)) if e.is_invalid_input() => Attempt::Fatal(e),
            Ok(Err(e)) => Attempt::NotYet(e),
            Ok(Ok(response)) if response.status == 200 => Attempt::Ready(()),
            Ok(Ok(response)) => Attempt::NotYet(ProbeError::UnexpectedStatus {
                status: response.status,
                url: url.to_string(),
            }),
        }
    })
    .await;

    match outcome {
        Ok(()) => {
            tracing::info!(url, "URL answered HTTP 200");
            Ok(())
        }
        Err(PollError::Fatal(e)) => Err(e),
        Err(PollError::Exhausted { last, .. }) => Err(ProbeError::DeadlineExceeded {
            target: url.to_string(),
            timeout: policy.timeout(),
            last: Box::new(last),
        }),
    }
}

/// Poll a component endpoint until it answers with the expected content.
///
/// # Errors
///
/// - [`ProbeError::Unreachable`] if no response arrived before the deadline.
/// - [`ProbeError::UnexpectedResponse`] as soon as the component answers with
///   a non-2xx status or a body that does not match the expectation.
/// - [`ProbeError::InvalidUrl`] if the target does not form a valid URL.
pub async fn check_component_ready(descriptor: &ProbeDescriptor) -> Result<()> {
    let target = &descriptor.target;
    let policy = target.retry_policy();
    let client = ProbeClient::builder()
        .endpoint(&target.host, target.port, target.secure)
        .ignore_cert(target.ignore_cert)
        .credentials(target.username.clone(), target.password.clone())
        .timeout(policy.timeout().max(MIN_ATTEMPT_BUDGET))
        .build()?;
    let client = &client;
    let endpoint = descriptor.endpoint.as_str();
    let component = descriptor.component.as_str();
    let expectation = &descriptor.expectation;

    tracing::debug!(
        component,
        url = %client.base_url(),
        endpoint,
        timeout = ?policy.timeout(),
        "Checking component readiness"
    );

    let outcome = poll_until(policy, move |budget| async move {
        let response = match tokio::time::timeout(budget, client.get(endpoint)).await {
            Err(_) => return Attempt::NotYet(ProbeError::Timeout(budget)),
            Ok(Err(e)) if e.is_invalid_input() => return Attempt::Fatal(e),
            Ok(Err(e)) => return Attempt::NotYet(e),
            Ok(Ok(response)) => response,
        };

        if !response.is_success() {
            return Attempt::Fatal(ProbeError::UnexpectedResponse {
                component: component.to_string(),
                status: response.status,
                details: format!("endpoint '{endpoint}' returned status {}", response.status),
            });
        }

        match expectation.check(&response.body) {
            Ok(()) => Attempt::Ready(()),
            Err(details) => Attempt::Fatal(ProbeError::UnexpectedResponse {
                component: component.to_string(),
                status: response.status,
                details,
            }),
        }
    })
    .await;

    match outcome {
        Ok(()) => {
            tracing::info!(component, "Component is ready");
            Ok(())
        }
        Err(PollError::Fatal(e)) => Err(e),
        Err(PollError::Exhausted { attempts, last }) => Err(ProbeError::Unreachable {
            component: component.to_string(),
            attempts,
            cause: Box::new(last),
        }),
    }
}

/// `host:port`, bracketing bare IPv6 literals.
fn socket_addr(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}
