//! Basic-auth credentials for probe requests.

use secrecy::{ExposeSecret, SecretString};

/// Username and password sent as HTTP basic auth.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    username: String,
    password: SecretString,
}

impl BasicAuth {
    /// Build credentials from optional parts.
    ///
    /// Returns `None` unless both the username and the password are present
    /// and non-empty; a half-configured pair sends no credentials at all.
    pub fn from_parts(username: Option<&str>, password: Option<&SecretString>) -> Option<Self> {
        match (username, password) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.expose_secret().is_empty() => {
                Some(Self {
                    username: user.to_string(),
                    password: pass.clone(),
                })
            }
            _ => None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Attach these credentials to a request.
    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}
