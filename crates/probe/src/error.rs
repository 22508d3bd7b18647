//! Error types for readiness probes.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Errors that can occur while probing a service.
///
/// The two failure classes callers care about are [`ProbeError::Unreachable`]
/// (nothing answered before the deadline) and
/// [`ProbeError::UnexpectedResponse`] (something answered, but not with what
/// the component should return). The remaining variants describe single
/// attempts or invalid input.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The component never answered before the deadline.
    #[error("{component} cannot be reached after {attempts} attempt(s): {cause}")]
    Unreachable {
        component: String,
        attempts: u32,
        cause: Box<ProbeError>,
    },

    /// The component answered with a non-success status or unexpected body.
    #[error("unexpected response from {component} (HTTP {status}): {details}")]
    UnexpectedResponse {
        component: String,
        status: u16,
        details: String,
    },

    /// A URL did not answer with HTTP 200 before the deadline.
    #[error("timed out after {timeout:?} waiting for {target}: {last}")]
    DeadlineExceeded {
        target: String,
        timeout: Duration,
        last: Box<ProbeError>,
    },

    /// A single attempt got an HTTP status other than the one required.
    #[error("HTTP {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// HTTP transport error (connection refused, DNS, TLS, read failure).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// A single attempt ran out of time.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid probe argument (host, port or timeout).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ProbeError {
    /// Check if this error means the peer never answered.
    ///
    /// Deadline errors are classified by the last attempt they carry.
    pub fn is_unreachable(&self) -> bool {
        match self {
            Self::Unreachable { .. } | Self::HttpError(_) | Self::Timeout(_) => true,
            Self::DeadlineExceeded { last, .. } => last.is_unreachable(),
            _ => false,
        }
    }

    /// Check if this error means the peer answered with the wrong thing.
    pub fn is_unexpected_response(&self) -> bool {
        match self {
            Self::UnexpectedResponse { .. } | Self::UnexpectedStatus { .. } => true,
            Self::DeadlineExceeded { last, .. } => last.is_unexpected_response(),
            _ => false,
        }
    }

    /// Check if this error was caused by invalid input rather than the peer.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidUrl(_) | Self::InvalidArgument(_))
    }
}
