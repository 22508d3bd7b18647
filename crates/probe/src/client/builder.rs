//! Builder for [`ProbeClient`] instances.
//!
//! Invariants:
//! - Exactly one base URL is used: either given directly or composed from
//!   host, port and scheme by [`ProbeClientBuilder::endpoint`].
//! - IPv6 literal hosts are bracketed when composing a URL.
//! - `ignore_cert` only affects HTTPS URLs; for HTTP a warning is logged.

use std::time::Duration;

use secrecy::SecretString;
use ub_config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_REQUEST_TIMEOUT_SECS};
use url::Url;

use crate::auth::BasicAuth;
use crate::client::ProbeClient;
use crate::error::{ProbeError, Result};

/// Builder for creating a new [`ProbeClient`].
///
/// ```rust,ignore
/// let client = ProbeClient::builder()
///     .endpoint("schema-registry", 8081, true)
///     .ignore_cert(true)
///     .credentials(Some("admin".to_string()), Some(password))
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct ProbeClientBuilder {
    base_url: Option<String>,
    ignore_cert: bool,
    username: Option<String>,
    password: Option<SecretString>,
    timeout: Duration,
}

impl Default for ProbeClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            ignore_cert: false,
            username: None,
            password: None,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ProbeClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL directly, e.g. `http://localhost:8080/health`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Compose the base URL from host, port and scheme.
    pub fn endpoint(mut self, host: &str, port: u16, secure: bool) -> Self {
        self.base_url = Some(compose_base_url(host, port, secure));
        self
    }

    /// Skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against services with self-signed certificates in
    /// trusted networks.
    pub fn ignore_cert(mut self, ignore: bool) -> Self {
        self.ignore_cert = ignore;
        self
    }

    /// Set basic-auth credentials. Both parts must be non-empty to take effect.
    pub fn credentials(mut self, username: Option<String>, password: Option<SecretString>) -> Self {
        self.username = username;
        self.password = password;
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the [`ProbeClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::InvalidUrl`] if no base URL was set or it does not
    /// parse as an `http`/`https` URL, and [`ProbeError::HttpError`] if the
    /// HTTP client fails to build.
    pub fn build(self) -> Result<ProbeClient> {
        let raw = self
            .base_url
            .ok_or_else(|| ProbeError::InvalidUrl("base_url is required".to_string()))?;
        let base_url =
            Url::parse(&raw).map_err(|e| ProbeError::InvalidUrl(format!("{raw}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ProbeError::InvalidUrl(format!(
                "{raw}: unsupported scheme '{}'",
                base_url.scheme()
            )));
        }

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(0)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.ignore_cert {
            if base_url.scheme() == "https" {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "ignore_cert=true has no effect on HTTP URLs. Certificate checks only apply to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;
        let auth = BasicAuth::from_parts(self.username.as_deref(), self.password.as_ref());

        Ok(ProbeClient {
            http,
            base_url,
            auth,
        })
    }
}

/// `scheme://host:port`, bracketing bare IPv6 literals.
fn compose_base_url(host: &str, port: u16, secure: bool) -> String {
    let scheme = if secure { "https" } else { "http" };
    if host.contains(':') && !host.starts_with('[') {
        format!("{scheme}://[{host}]:{port}")
    } else {
        format!("{scheme}://{host}:{port}")
    }
}
