//! Wait-for-server and wait-for-http command implementations.

use anyhow::{Context, Result};
use ub_config::ProbeSettings;
use ub_probe::{RetryPolicy, parse_port, parse_timeout_secs, wait_for_http, wait_for_server};

use crate::error::CommandError;

pub async fn run_server(
    host: &str,
    port: &str,
    timeout_secs: &str,
    settings: &ProbeSettings,
) -> Result<()> {
    let host = host.trim();
    if host.is_empty() {
        return Err(CommandError::Validation("host must not be empty".to_string()).into());
    }
    let port = parse_port(port)?;
    let timeout = parse_timeout_secs(timeout_secs)?;
    let policy = RetryPolicy::new(timeout).with_interval(settings.poll_interval);

    if wait_for_server(host, port, policy).await {
        Ok(())
    } else {
        Err(CommandError::Unreachable(format!(
            "{host}:{port} did not accept connections within {}s",
            timeout.as_secs()
        ))
        .into())
    }
}

pub async fn run_http(url: &str, timeout_secs: &str, settings: &ProbeSettings) -> Result<()> {
    let timeout = parse_timeout_secs(timeout_secs)?;
    let policy = RetryPolicy::new(timeout).with_interval(settings.poll_interval);

    wait_for_http(url, policy)
        .await
        .with_context(|| format!("{url} is not ready"))
}
