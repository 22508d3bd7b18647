//! CLI command implementations.

pub mod ensure;
pub mod kafka_ready;
pub mod listeners;
pub mod path;
pub mod ready;
pub mod render_properties;
pub mod render_template;
pub mod wait;

use anyhow::{Context, Result};
use ub_config::{Environment, ProbeSettings};

/// Read polling and JVM settings from the current environment.
pub fn load_probe_settings() -> Result<ProbeSettings> {
    ProbeSettings::from_env(&Environment::capture()).context("Failed to load probe settings")
}
