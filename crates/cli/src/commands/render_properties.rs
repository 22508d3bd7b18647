//! Render-properties command implementation.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use ub_config::{Environment, build_properties, load_config_spec, write_properties};

/// Load the config spec at `spec_path` and print the derived properties.
pub fn run(spec_path: &Path) -> Result<()> {
    let spec = load_config_spec(spec_path)
        .with_context(|| format!("Failed to load config spec {}", spec_path.display()))?;
    let properties = build_properties(&spec, &Environment::capture());
    info!(
        spec = %spec_path.display(),
        count = properties.len(),
        "Rendering properties"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_properties(&mut out, &properties).context("Failed to write properties")?;
    out.flush().context("Failed to write properties")?;
    Ok(())
}
