//! Error types for configuration derivation.
//!
//! Responsibilities:
//! - Define error variants for config-spec and template loading and environment parsing.
//! - Carry the offending path or variable name for diagnostics.
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the CLI crate).
//!
//! Invariants:
//! - Read failures and parse failures of a config spec are distinct variants.
//! - Variable values are never included in messages; only their names are.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading or deriving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config spec at {path}")]
    SpecRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config spec at {path}")]
    SpecParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read template at {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render template at {path}")]
    TemplateRender {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Invalid listeners: {0}")]
    InvalidListeners(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
