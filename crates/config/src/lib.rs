//! Configuration derivation for container bootstrap.
//!
//! This crate turns an environment snapshot into Java-style properties
//! according to a declarative [`ConfigSpec`], renders configuration templates
//! against the same snapshot, and provides the small parsing
//! helpers and settings shared with the readiness commands.

pub mod constants;
mod env;
mod error;
mod key;
mod listeners;
mod loggers;
mod properties;
mod settings;
mod spec;
mod template;

pub use env::Environment;
pub use error::{ConfigError, Result};
pub use key::convert_key;
pub use listeners::strip_listener_protocols;
pub use loggers::parse_log4j_loggers;
pub use properties::{
    Properties, build_properties, env_to_props, env_to_props_with_two_prefixes, set_properties,
    write_properties,
};
pub use settings::ProbeSettings;
pub use spec::{ConfigSpec, PrefixRule, PrefixRules, load_config_spec};
pub use template::{kv_string_to_map, render_template, render_template_file, split_to_map_defaults};
