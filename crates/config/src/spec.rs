//! Declarative rule set controlling which environment variables become properties.
//!
//! Responsibilities:
//! - Define [`ConfigSpec`] and its JSON representation.
//! - Preserve the document order of prefix rules.
//! - Load a spec from a file.
//!
//! Does NOT handle:
//! - Applying the rules to an environment (see `properties`).
//!
//! Invariants:
//! - Prefix rules keep the order in which they appear in the JSON object.
//! - A prefix repeated in the document updates the earlier rule in place.
//! - Every field is optional; missing and `null` fields default to empty.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

use crate::error::{ConfigError, Result};

/// A single prefix rule: variables starting with `prefix` produce properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRule {
    pub prefix: String,
    /// When true the whole variable name is converted; otherwise the prefix
    /// and its separator are stripped first.
    pub keep_full_name: bool,
}

impl PrefixRule {
    pub fn new(prefix: impl Into<String>, keep_full_name: bool) -> Self {
        Self {
            prefix: prefix.into(),
            keep_full_name,
        }
    }
}

/// Prefix rules in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixRules(Vec<PrefixRule>);

impl PrefixRules {
    pub fn iter(&self) -> std::slice::Iter<'_, PrefixRule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn upsert(&mut self, rule: PrefixRule) {
        match self.0.iter_mut().find(|r| r.prefix == rule.prefix) {
            Some(existing) => existing.keep_full_name = rule.keep_full_name,
            None => self.0.push(rule),
        }
    }
}

impl FromIterator<PrefixRule> for PrefixRules {
    fn from_iter<I: IntoIterator<Item = PrefixRule>>(iter: I) -> Self {
        let mut rules = PrefixRules::default();
        for rule in iter {
            rules.upsert(rule);
        }
        rules
    }
}

impl<'a> IntoIterator for &'a PrefixRules {
    type Item = &'a PrefixRule;
    type IntoIter = std::slice::Iter<'a, PrefixRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for PrefixRules {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RulesVisitor;

        impl<'de> Visitor<'de> for RulesVisitor {
            type Value = PrefixRules;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping prefixes to booleans")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut rules = PrefixRules::default();
                while let Some((prefix, keep)) = map.next_entry::<String, bool>()? {
                    rules.upsert(PrefixRule::new(prefix, keep));
                }
                Ok(rules)
            }
        }

        deserializer.deserialize_map(RulesVisitor)
    }
}

/// Deserialize `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Rule set for deriving properties from an environment.
///
/// A field given as `null` is treated the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub prefixes: PrefixRules,
    #[serde(deserialize_with = "null_as_default")]
    pub excludes: BTreeSet<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub renamed: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub defaults: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub exclude_with_prefix: String,
}

impl ConfigSpec {
    /// Parse a spec from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Whether a variable is excluded by name or by the exclusion prefix.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excludes.contains(name)
            || (!self.exclude_with_prefix.is_empty() && name.starts_with(&self.exclude_with_prefix))
    }
}

/// Load a [`ConfigSpec`] from a JSON file.
pub fn load_config_spec(path: impl AsRef<Path>) -> Result<ConfigSpec> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::SpecRead {
        path: path.to_path_buf(),
        source,
    })?;
    let spec = ConfigSpec::from_json(&content).map_err(|source| ConfigError::SpecParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        prefixes = spec.prefixes.len(),
        renamed = spec.renamed.len(),
        defaults = spec.defaults.len(),
        "Loaded config spec"
    );
    Ok(spec)
}
