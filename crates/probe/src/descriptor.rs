//! What to probe and what counts as ready.

use std::time::Duration;

use secrecy::SecretString;
use ub_config::constants::DEFAULT_POLL_INTERVAL_MS;

use crate::error::{ProbeError, Result};
use crate::retry::RetryPolicy;

/// Where a service lives and how to talk to it.
#[derive(Debug, Clone)]
pub struct ProbeTarget {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
    pub secure: bool,
    pub ignore_cert: bool,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub poll_interval: Duration,
}

impl ProbeTarget {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
            secure: false,
            ignore_cert: false,
            username: None,
            password: None,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }

    /// Parse command-line style `host`, `port` and `timeout-secs` arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::InvalidArgument`] for an empty host, a port that
    /// is not a number in `1..=65535`, or a timeout that is not a whole
    /// number of seconds.
    pub fn parse(host: &str, port: &str, timeout_secs: &str) -> Result<Self> {
        let host = host.trim();
        if host.is_empty() {
            return Err(ProbeError::InvalidArgument("host must not be empty".to_string()));
        }
        let port = parse_port(port)?;
        let timeout = parse_timeout_secs(timeout_secs)?;
        Ok(Self::new(host, port, timeout))
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn ignore_cert(mut self, ignore: bool) -> Self {
        self.ignore_cert = ignore;
        self
    }

    pub fn credentials(mut self, username: Option<String>, password: Option<SecretString>) -> Self {
        self.username = username;
        self.password = password;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.timeout).with_interval(self.poll_interval)
    }
}

/// Parse a TCP port argument.
pub fn parse_port(port: &str) -> Result<u16> {
    match port.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(ProbeError::InvalidArgument(format!(
            "invalid port '{port}': expected a number between 1 and 65535"
        ))),
        Ok(p) => Ok(p),
    }
}

/// Parse a timeout argument given in whole seconds.
pub fn parse_timeout_secs(timeout: &str) -> Result<Duration> {
    timeout
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| {
            ProbeError::InvalidArgument(format!(
                "invalid timeout '{timeout}': expected a whole number of seconds"
            ))
        })
}

/// What a successful response body must look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// Any 2xx status is enough.
    Status,
    /// The body must contain this substring.
    Contains(String),
    /// The body must be a JSON object with this top-level field.
    JsonField(String),
}

impl Expectation {
    /// Check a response body, returning a description of the mismatch.
    pub fn check(&self, body: &str) -> std::result::Result<(), String> {
        match self {
            Self::Status => Ok(()),
            Self::Contains(needle) => {
                if body.contains(needle.as_str()) {
                    Ok(())
                } else {
                    Err(format!("response does not contain '{needle}'"))
                }
            }
            Self::JsonField(field) => match serde_json::from_str::<serde_json::Value>(body) {
                Ok(serde_json::Value::Object(map)) if map.contains_key(field) => Ok(()),
                Ok(_) => Err(format!("response has no '{field}' field")),
                Err(e) => Err(format!("response is not JSON: {e}")),
            },
        }
    }
}

/// A complete readiness probe: target, endpoint and expected content.
#[derive(Debug, Clone)]
pub struct ProbeDescriptor {
    pub target: ProbeTarget,
    pub endpoint: String,
    pub expectation: Expectation,
    pub component: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_arguments() {
        let target = ProbeTarget::parse("localhost", "8081", "10").unwrap();
        assert_eq!(target.host, "localhost");
        assert_eq!(target.port, 8081);
        assert_eq!(target.timeout, Duration::from_secs(10));
        assert!(!target.secure);
        assert_eq!(target.poll_interval, Duration::from_millis(500));
    }

    #[test]
    fn test_parse_invalid_port() {
        for port in ["65536", "-1", "http", "", "0"] {
            let err = ProbeTarget::parse("localhost", port, "10").unwrap_err();
            assert!(err.is_invalid_input(), "port {port:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_invalid_timeout() {
        for timeout in ["-10", "ten", "1.5", ""] {
            let err = ProbeTarget::parse("localhost", "8081", timeout).unwrap_err();
            assert!(err.to_string().contains("invalid timeout"));
        }
    }

    #[test]
    fn test_parse_invalid_host() {
        assert!(ProbeTarget::parse("", "8081", "10").is_err());
        assert!(ProbeTarget::parse("  ", "8081", "10").is_err());
    }

    #[test]
    fn test_zero_timeout_is_accepted() {
        let target = ProbeTarget::parse("localhost", "8081", "0").unwrap();
        assert_eq!(target.timeout, Duration::ZERO);
    }

    #[test]
    fn test_retry_policy_from_target() {
        let target = ProbeTarget::new("localhost", 8081, Duration::from_secs(3))
            .poll_interval(Duration::from_millis(50));
        let policy = target.retry_policy();
        assert_eq!(policy.timeout(), Duration::from_secs(3));
        assert_eq!(policy.interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_expectation_contains() {
        let exp = Expectation::Contains("compatibilityLevel".to_string());
        assert!(exp.check(r#"{"compatibilityLevel":"FULL"}"#).is_ok());
        assert!(exp.check("{}").is_err());
    }

    #[test]
    fn test_expectation_json_field() {
        let exp = Expectation::JsonField("version".to_string());
        assert!(exp.check(r#"{"version":"7.5.0","commit":"abc"}"#).is_ok());
        assert!(exp.check(r#"{"commit":"abc"}"#).is_err());
        assert!(exp.check(r#"["version"]"#).is_err());
        assert!(exp.check("version").is_err());
    }

    #[test]
    fn test_expectation_status_accepts_anything() {
        assert!(Expectation::Status.check("").is_ok());
    }
}
