//! HTTP client used for a single readiness probe.
//!
//! Responsibilities:
//! - Resolve endpoint paths against the probe's base URL.
//! - Issue GET requests with optional basic auth and collect status and body.
//!
//! Does NOT handle:
//! - Retrying or deadlines (see [`crate::retry`]).
//! - Deciding whether a response means "ready" (see [`crate::checker`]).
//!
//! Invariants:
//! - Connections are never kept idle between requests, so every attempt
//!   opens and closes its own connection.

mod builder;

pub use builder::ProbeClientBuilder;

use url::Url;

use crate::auth::BasicAuth;
use crate::error::{ProbeError, Result};

/// Status and body of one probe request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

impl ProbeResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client bound to one service base URL.
#[derive(Debug, Clone)]
pub struct ProbeClient {
    http: reqwest::Client,
    base_url: Url,
    auth: Option<BasicAuth>,
}

impl ProbeClient {
    /// Create a new client builder.
    pub fn builder() -> ProbeClientBuilder {
        ProbeClientBuilder::new()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether requests carry basic-auth credentials.
    pub fn has_auth(&self) -> bool {
        self.auth.is_some()
    }

    /// Resolve `path` against the base URL. An empty path is the base URL itself.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        if path.is_empty() {
            return Ok(self.base_url.clone());
        }
        self.base_url
            .join(path)
            .map_err(|e| ProbeError::InvalidUrl(format!("{path}: {e}")))
    }

    /// GET `path` and return its status and body.
    ///
    /// Transport failures are returned as [`ProbeError::HttpError`]; any HTTP
    /// status, including errors, is returned as a [`ProbeResponse`].
    pub async fn get(&self, path: &str) -> Result<ProbeResponse> {
        let url = self.url_for(path)?;
        tracing::debug!(%url, auth = self.auth.is_some(), "Sending probe request");

        let mut request = self.http.get(url);
        if let Some(auth) = &self.auth {
            request = auth.apply(request);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ProbeResponse { status, body })
    }
}
