//! Kafka-ready command implementation.
//!
//! Broker readiness is delegated to the JVM readiness tool; this command
//! validates the arguments, builds the `java` command line and reports the
//! tool's exit status.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};
use ub_config::ProbeSettings;
use ub_config::constants::KAFKA_READY_CLASS;

use crate::error::CommandError;

/// Optional flags forwarded to the readiness tool.
#[derive(Debug, Clone, Default)]
pub struct KafkaReadyOptions {
    pub bootstrap_servers: Option<String>,
    pub config: Option<PathBuf>,
    pub zookeeper_connect: Option<String>,
    pub security: Option<String>,
}

/// Build the arguments passed to `java`.
///
/// The timeout is given to the tool in milliseconds.
pub fn java_args(
    min_brokers: &str,
    timeout_secs: &str,
    options: &KafkaReadyOptions,
    settings: &ProbeSettings,
) -> Result<Vec<String>> {
    let min_brokers: u32 = min_brokers.trim().parse().map_err(|_| {
        CommandError::Validation(format!(
            "invalid minimum broker count '{min_brokers}': expected a whole number"
        ))
    })?;
    let timeout = ub_probe::parse_timeout_secs(timeout_secs)?;

    let mut args: Vec<String> = settings
        .jvm_opts
        .as_deref()
        .map(|opts| opts.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();
    args.extend([
        "-cp".to_string(),
        settings.classpath.clone(),
        KAFKA_READY_CLASS.to_string(),
        min_brokers.to_string(),
        timeout.as_millis().to_string(),
    ]);

    let flags = [
        ("-b", options.bootstrap_servers.clone()),
        ("-z", options.zookeeper_connect.clone()),
        ("-c", options.config.as_ref().map(|p| p.display().to_string())),
        ("-s", options.security.clone()),
    ];
    for (flag, value) in flags {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            args.push(flag.to_string());
            args.push(value);
        }
    }

    Ok(args)
}

pub async fn run(
    min_brokers: &str,
    timeout_secs: &str,
    options: &KafkaReadyOptions,
    settings: &ProbeSettings,
) -> Result<()> {
    let args = java_args(min_brokers, timeout_secs, options, settings)?;
    debug!(?args, "Invoking readiness tool");

    let status = tokio::process::Command::new("java")
        .args(&args)
        .status()
        .await
        .context("Failed to run java")?;

    if status.success() {
        info!("Kafka cluster is ready");
        Ok(())
    } else {
        Err(CommandError::CheckFailed(format!("kafka-ready check failed ({status})")).into())
    }
}
