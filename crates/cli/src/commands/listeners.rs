//! Listeners command implementation.

use anyhow::{Context, Result};

/// Print the advertised listeners with their protocols stripped.
pub fn run(args: &[String]) -> Result<()> {
    let hosts = ub_config::strip_listener_protocols(args)
        .context("Failed to parse advertised listeners")?;
    println!("{hosts}");
    Ok(())
}
