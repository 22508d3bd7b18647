//! Render-template command implementation.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ub_config::{Environment, render_template_file};

/// Render the template at `template_path` against the environment and print it.
pub fn run(template_path: &Path) -> Result<()> {
    let rendered = render_template_file(template_path, &Environment::capture())
        .with_context(|| format!("Failed to render template {}", template_path.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(rendered.as_bytes())
        .context("Failed to write rendered template")?;
    out.flush().context("Failed to write rendered template")?;
    Ok(())
}
