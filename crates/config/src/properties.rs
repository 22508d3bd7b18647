//! Property derivation from an environment snapshot.
//!
//! Responsibilities:
//! - Merge a [`ConfigSpec`] with an [`Environment`] into a property set.
//! - Provide the single-prefix, two-prefix, and explicit-mapping variants.
//! - Serialize a property set as `key=value` lines.
//!
//! Does NOT handle:
//! - Reading the process environment (callers pass a snapshot).
//! - Loading the config-spec file (see `spec` module).
//!
//! Invariants:
//! - Defaults seed the result and are only ever overwritten, never dropped.
//! - A rename takes precedence over exclusions and prefix rules.
//! - Prefix rules are applied in declaration order; the last matching rule wins.
//! - Environment entries are visited in ascending name order.
//! - Output is written in ascending key order.

use std::collections::BTreeMap;
use std::io::Write;

use crate::env::Environment;
use crate::error::Result;
use crate::key::convert_key;
use crate::spec::ConfigSpec;

/// Derived properties, ordered by key.
pub type Properties = BTreeMap<String, String>;

/// Build properties from a spec and an environment snapshot.
pub fn build_properties(spec: &ConfigSpec, env: &Environment) -> Properties {
    let mut config = spec.defaults.clone();

    for (name, value) in env.iter() {
        if let Some(renamed) = spec.renamed.get(name) {
            config.insert(renamed.clone(), value.to_string());
            continue;
        }
        if spec.is_excluded(name) {
            continue;
        }
        for rule in &spec.prefixes {
            if !name.starts_with(&rule.prefix) {
                continue;
            }
            let effective = if rule.keep_full_name {
                name
            } else {
                strip_prefix_and_separator(name, &rule.prefix)
            };
            if effective.is_empty() {
                tracing::debug!(
                    var = name,
                    prefix = %rule.prefix,
                    "Skipping variable with nothing after prefix"
                );
                continue;
            }
            config.insert(convert_key(effective), value.to_string());
        }
    }

    config
}

/// Remove `prefix` and then one `_` separator, if present.
fn strip_prefix_and_separator<'a>(name: &'a str, prefix: &str) -> &'a str {
    let rest = name.strip_prefix(prefix).unwrap_or(name);
    rest.strip_prefix('_').unwrap_or(rest)
}

/// Write properties as `key=value` lines in ascending key order.
pub fn write_properties<W: Write>(writer: &mut W, properties: &Properties) -> Result<()> {
    for (key, value) in properties {
        writeln!(writer, "{key}={value}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Derive properties from every variable starting with `env_prefix`.
///
/// The prefix is stripped, the remainder converted with [`convert_key`] and
/// `prop_prefix` prepended. Variables named in `exclude_env_names` are
/// skipped, as are derived keys starting with any of `exclude_prop_prefixes`
/// or equal to any of `exclude_props`.
pub fn env_to_props(
    env: &Environment,
    env_prefix: &str,
    prop_prefix: &str,
    exclude_env_names: &[&str],
    exclude_prop_prefixes: &[&str],
    exclude_props: &[&str],
) -> Properties {
    let mut props = Properties::new();

    for (name, value) in env.with_prefix(env_prefix) {
        if exclude_env_names.contains(&name) {
            continue;
        }
        let rest = &name[env_prefix.len()..];
        if rest.is_empty() {
            continue;
        }
        let key = format!("{prop_prefix}{}", convert_key(rest));
        if exclude_prop_prefixes.iter().any(|p| key.starts_with(p)) {
            continue;
        }
        if exclude_props.contains(&key.as_str()) {
            continue;
        }
        props.insert(key, value.to_string());
    }

    props
}

/// Apply [`env_to_props`] with `secondary_prefix` first and then
/// `primary_prefix`, so primary variables override secondary ones for the
/// same derived key.
pub fn env_to_props_with_two_prefixes(
    env: &Environment,
    primary_prefix: &str,
    secondary_prefix: &str,
    prop_prefix: &str,
    exclude_env_names: &[&str],
    exclude_prop_prefixes: &[&str],
) -> Properties {
    let mut props = env_to_props(
        env,
        secondary_prefix,
        prop_prefix,
        exclude_env_names,
        exclude_prop_prefixes,
        &[],
    );
    props.extend(env_to_props(
        env,
        primary_prefix,
        prop_prefix,
        exclude_env_names,
        exclude_prop_prefixes,
        &[],
    ));
    props
}

/// Resolve each property from an ordered list of candidate variables.
///
/// The first non-empty candidate not named in `exclude_env_names` wins. When
/// no candidate has a value the property is emitted empty if `required`,
/// and omitted otherwise.
pub fn set_properties(
    env: &Environment,
    property_to_env_names: &BTreeMap<String, Vec<String>>,
    required: bool,
    exclude_env_names: &[&str],
) -> Properties {
    let mut props = Properties::new();

    for (property, candidates) in property_to_env_names {
        let value = candidates
            .iter()
            .filter(|name| !exclude_env_names.contains(&name.as_str()))
            .find_map(|name| env.get_non_empty(name));

        match value {
            Some(v) => {
                props.insert(property.clone(), v.to_string());
            }
            None if required => {
                tracing::warn!(property = %property, "Required property has no value");
                props.insert(property.clone(), String::new());
            }
            None => {}
        }
    }

    props
}
