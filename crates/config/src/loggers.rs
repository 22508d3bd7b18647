//! Parsing of `name=LEVEL` logger override lists.

use std::collections::BTreeMap;

/// Parse a comma-separated `name=LEVEL` list on top of `default_loggers`.
///
/// Whitespace around names, `=` and levels is trimmed. Entries that are not
/// exactly `name=LEVEL` with both sides non-empty are ignored, leaving any
/// default for that name untouched.
pub fn parse_log4j_loggers(
    loggers: &str,
    default_loggers: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut result = default_loggers.clone();

    for entry in loggers.split(',') {
        let mut parts = entry.split('=');
        let (Some(name), Some(level), None) = (parts.next(), parts.next(), parts.next()) else {
            if !entry.trim().is_empty() {
                tracing::debug!(entry = entry.trim(), "Ignoring malformed logger entry");
            }
            continue;
        };
        let (name, level) = (name.trim(), level.trim());
        if name.is_empty() || level.is_empty() {
            continue;
        }
        result.insert(name.to_string(), level.to_string());
    }

    result
}
