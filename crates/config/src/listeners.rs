//! Advertised-listener parsing.

use crate::error::{ConfigError, Result};

const SCHEME_SEPARATOR: &str = "://";

/// Strip the `PROTOCOL://` prefix from every entry of an advertised-listeners
/// argument list and rejoin the bare `host:port` entries with commas.
///
/// Exactly one argument is accepted. Empty entries (e.g. from a trailing
/// comma) are skipped; an entry containing the scheme separator more than
/// once is rejected, as is input with no entries at all.
pub fn strip_listener_protocols<S: AsRef<str>>(args: &[S]) -> Result<String> {
    let listeners = match args {
        [one] => one.as_ref(),
        [] => {
            return Err(ConfigError::InvalidListeners(
                "expected one argument, got none".to_string(),
            ));
        }
        _ => {
            return Err(ConfigError::InvalidListeners(format!(
                "expected one argument, got {}",
                args.len()
            )));
        }
    };

    if listeners.trim().is_empty() {
        return Err(ConfigError::InvalidListeners(
            "advertised listeners are empty".to_string(),
        ));
    }

    let mut hosts = Vec::new();
    for entry in listeners.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let mut parts = entry.split(SCHEME_SEPARATOR);
        let host = match (parts.next(), parts.next(), parts.next()) {
            (Some(bare), None, None) => bare,
            (Some(_), Some(host), None) if !host.is_empty() => host,
            _ => {
                return Err(ConfigError::InvalidListeners(format!(
                    "malformed listener '{entry}'"
                )));
            }
        };
        hosts.push(host);
    }

    if hosts.is_empty() {
        return Err(ConfigError::InvalidListeners(
            "no listeners found".to_string(),
        ));
    }

    Ok(hosts.join(","))
}
