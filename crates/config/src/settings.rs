//! Typed settings read from the environment snapshot.
//!
//! Responsibilities:
//! - Read polling and JVM-tool settings from an [`Environment`].
//! - Validate numeric values and report the offending variable by name.
//!
//! Does NOT handle:
//! - Command-line overrides (applied by the CLI after loading).
//!
//! Invariants:
//! - Empty or whitespace-only variables are treated as unset.
//! - Invalid values return `ConfigError::InvalidValue`; defaults are never
//!   substituted for a value that is present but malformed.

use std::time::Duration;

use crate::constants::{
    DEFAULT_CLASSPATH, DEFAULT_POLL_INTERVAL_MS, ENV_CLASSPATH, ENV_KAFKA_OPTS,
    ENV_LEGACY_CLASSPATH, ENV_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS, MIN_POLL_INTERVAL_MS,
};
use crate::env::Environment;
use crate::error::{ConfigError, Result};

/// Settings shared by the readiness commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    /// Delay between polling attempts.
    pub poll_interval: Duration,
    /// Classpath for the JVM readiness tool.
    pub classpath: String,
    /// Extra JVM options for the JVM readiness tool.
    pub jvm_opts: Option<String>,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            classpath: DEFAULT_CLASSPATH.to_string(),
            jvm_opts: None,
        }
    }
}

impl ProbeSettings {
    /// Read settings from an environment snapshot.
    pub fn from_env(env: &Environment) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(interval) = env.get_trimmed(ENV_POLL_INTERVAL_MS) {
            let ms: u64 = interval.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_POLL_INTERVAL_MS.to_string(),
                message: "must be a number".to_string(),
            })?;
            if !(MIN_POLL_INTERVAL_MS..=MAX_POLL_INTERVAL_MS).contains(&ms) {
                return Err(ConfigError::InvalidValue {
                    var: ENV_POLL_INTERVAL_MS.to_string(),
                    message: format!(
                        "must be between {} and {} (got {})",
                        MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS, ms
                    ),
                });
            }
            settings.poll_interval = Duration::from_millis(ms);
        }

        settings.classpath =
            env.get_env_with_fallbacks(DEFAULT_CLASSPATH, &[ENV_CLASSPATH, ENV_LEGACY_CLASSPATH]);
        settings.jvm_opts = env.get_trimmed(ENV_KAFKA_OPTS).map(str::to_string);

        Ok(settings)
    }
}
