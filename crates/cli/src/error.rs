//! CLI exit codes for scripting and container entrypoints.
//!
//! Responsibilities:
//! - Define structured exit codes that entrypoint scripts can branch on.
//! - Map `ConfigError`, `ProbeError` and `CommandError` to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 is left to clap for usage errors.
//! - The first recognized error in the anyhow chain decides the exit code.

use ub_config::ConfigError;
use ub_probe::ProbeError;

/// Structured exit codes for ub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - a check came back negative or an external tool failed.
    GeneralError = 1,

    /// Unreachable - nothing answered before the deadline.
    ///
    /// The dependency may still be starting; callers may retry the command.
    Unreachable = 3,

    /// Unexpected response - the service answered, but not as expected.
    UnexpectedResponse = 4,

    /// Validation error - bad arguments; fix the input rather than retrying.
    ValidationError = 5,

    /// Config error - unreadable or malformed spec or template, invalid settings variable.
    ConfigError = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Failures raised by the commands themselves rather than the libraries.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Invalid command-line input.
    #[error("{0}")]
    Validation(String),

    /// A check ran and came back negative.
    #[error("{0}")]
    CheckFailed(String),

    /// A target never became reachable.
    #[error("{0}")]
    Unreachable(String),
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::InvalidListeners(_) => ExitCode::ValidationError,
            ConfigError::SpecRead { .. }
            | ConfigError::SpecParse { .. }
            | ConfigError::TemplateRead { .. }
            | ConfigError::TemplateRender { .. }
            | ConfigError::InvalidValue { .. } => ExitCode::ConfigError,
            ConfigError::Io(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&ProbeError> for ExitCode {
    fn from(err: &ProbeError) -> Self {
        if err.is_invalid_input() {
            ExitCode::ValidationError
        } else if err.is_unexpected_response() {
            ExitCode::UnexpectedResponse
        } else if err.is_unreachable() {
            ExitCode::Unreachable
        } else {
            ExitCode::GeneralError
        }
    }
}

impl From<&CommandError> for ExitCode {
    fn from(err: &CommandError) -> Self {
        match err {
            CommandError::Validation(_) => ExitCode::ValidationError,
            CommandError::CheckFailed(_) => ExitCode::GeneralError,
            CommandError::Unreachable(_) => ExitCode::Unreachable,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<CommandError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ProbeError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
        }

        ExitCode::GeneralError
    }
}
