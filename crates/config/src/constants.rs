//! Centralized constants for the ub workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Polling Defaults
// =============================================================================

/// Default interval between readiness polling attempts in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Smallest accepted polling interval in milliseconds.
pub const MIN_POLL_INTERVAL_MS: u64 = 10;

/// Largest accepted polling interval in milliseconds (1 minute).
pub const MAX_POLL_INTERVAL_MS: u64 = 60_000;

/// Default HTTP request timeout in seconds for a probe client.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of HTTP redirects to follow during a probe.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Overrides the polling interval used by the readiness commands.
pub const ENV_POLL_INTERVAL_MS: &str = "UB_POLL_INTERVAL_MS";

/// Primary classpath variable for the JVM readiness tool.
pub const ENV_CLASSPATH: &str = "UB_CLASSPATH";

/// Legacy classpath variable, consulted when `UB_CLASSPATH` is unset or empty.
pub const ENV_LEGACY_CLASSPATH: &str = "CUB_CLASSPATH";

/// Extra JVM options for the JVM readiness tool.
pub const ENV_KAFKA_OPTS: &str = "KAFKA_OPTS";

// =============================================================================
// JVM Readiness Tool
// =============================================================================

/// Classpath used when neither classpath variable is set.
pub const DEFAULT_CLASSPATH: &str = "/usr/share/java/cp-base-java/*";

/// Main class of the broker readiness tool.
pub const KAFKA_READY_CLASS: &str = "io.confluent.admin.utils.cli.KafkaReadyCommand";
