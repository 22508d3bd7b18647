//! Rendering of configuration templates against an environment snapshot.
//!
//! Responsibilities:
//! - Render a template file with the environment as its context.
//! - Provide the template helpers `getEnv`, `splitToMapDefaults` and
//!   `parseLog4jLoggers`.
//!
//! Does NOT handle:
//! - Reading the process environment (callers pass a snapshot).
//! - Writing the rendered text anywhere.
//!
//! Invariants:
//! - Every variable of the snapshot is available by name at the top level.
//! - Undefined names render as empty strings.
//! - A trailing newline in the template is kept.

use std::collections::BTreeMap;
use std::path::Path;

use minijinja::Value;

use crate::env::Environment;
use crate::error::{ConfigError, Result};
use crate::loggers::parse_log4j_loggers;

/// Parse `key=value` entries separated by `separator`.
///
/// Only the first `=` splits an entry; entries without one are ignored.
pub fn kv_string_to_map(kv: &str, separator: &str) -> BTreeMap<String, String> {
    kv.split(separator)
        .filter_map(|item| item.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Parse `default_values` and `value` as `key=value` lists and overlay the
/// second on the first.
pub fn split_to_map_defaults(
    separator: &str,
    default_values: &str,
    value: &str,
) -> BTreeMap<String, String> {
    let mut values = kv_string_to_map(default_values, separator);
    values.extend(kv_string_to_map(value, separator));
    values
}

fn template_env(env: &Environment) -> minijinja::Environment<'static> {
    let mut tmpl = minijinja::Environment::new();
    tmpl.set_keep_trailing_newline(true);

    let vars = env.clone();
    tmpl.add_function("getEnv", move |name: String, default: Option<String>| -> String {
        match vars.get_non_empty(&name) {
            Some(value) => value.to_string(),
            None => default.unwrap_or_default(),
        }
    });
    tmpl.add_function(
        "splitToMapDefaults",
        |separator: String, default_values: String, value: String| -> Value {
            Value::from_serialize(split_to_map_defaults(&separator, &default_values, &value))
        },
    );
    tmpl.add_function(
        "parseLog4jLoggers",
        |loggers: String, default_loggers: String| -> Value {
            let defaults = kv_string_to_map(&default_loggers, ",");
            Value::from_serialize(parse_log4j_loggers(&loggers, &defaults))
        },
    );

    tmpl
}

/// Render template `source` against `env`. `name` appears in error messages.
pub fn render_template(
    name: &str,
    source: &str,
    env: &Environment,
) -> std::result::Result<String, minijinja::Error> {
    let tmpl = template_env(env);
    let context: BTreeMap<&str, &str> = env.iter().collect();
    tmpl.render_named_str(name, source, context)
}

/// Load the template at `path` and render it against `env`.
pub fn render_template_file(path: impl AsRef<Path>, env: &Environment) -> Result<String> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::TemplateRead {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let rendered = render_template(&name, &source, env).map_err(|source| {
        ConfigError::TemplateRender {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::debug!(path = %path.display(), bytes = rendered.len(), "Rendered template");
    Ok(rendered)
}
