//! Immutable snapshot of the process environment.
//!
//! Responsibilities:
//! - Capture the process environment once per invocation.
//! - Provide ordered, read-only lookups for derivation and probing code.
//! - Resolve fallback chains of variable names.
//!
//! Does NOT handle:
//! - Turning variables into properties (see `properties`).
//! - Parsing typed settings (see `settings`).
//!
//! Invariants:
//! - A variable is either present (possibly empty) or absent.
//! - Iteration is in ascending name order.
//! - `capture` is the only function in this crate that reads the process environment.

use std::collections::BTreeMap;

/// An immutable, ordered mapping from variable name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Snapshot the current process environment.
    ///
    /// Entries whose name or value is not valid UTF-8 are skipped.
    pub fn capture() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Look up a variable. Returns `Some("")` for a variable that is set but empty.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Look up a variable, treating empty values as absent.
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// Look up a variable, treating empty and whitespace-only values as absent.
    /// Returns the trimmed value.
    pub fn get_trimmed(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Whether the variable is present, even if empty.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Iterate over `(name, value)` pairs in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over variables whose name starts with `prefix`.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.iter().filter(move |(k, _)| k.starts_with(prefix))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Return the first non-empty value among `names`, or `default` if none is set.
    pub fn get_env_with_fallbacks<S: AsRef<str>>(&self, default: &str, names: &[S]) -> String {
        names
            .iter()
            .find_map(|name| self.get_non_empty(name.as_ref()))
            .unwrap_or(default)
            .to_string()
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn env(pairs: &[(&str, &str)]) -> Environment {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_get_distinguishes_empty_from_absent() {
        let e = env(&[("SET_EMPTY", "")]);
        assert_eq!(e.get("SET_EMPTY"), Some(""));
        assert!(e.contains("SET_EMPTY"));
        assert_eq!(e.get_non_empty("SET_EMPTY"), None);
        assert_eq!(e.get("MISSING"), None);
        assert!(!e.contains("MISSING"));
    }

    #[test]
    fn test_get_trimmed_filters_whitespace() {
        let e = env(&[("BLANK", "   "), ("PADDED", " value ")]);
        assert_eq!(e.get_trimmed("BLANK"), None);
        assert_eq!(e.get_trimmed("PADDED"), Some("value"));
    }

    #[test]
    fn test_iter_is_sorted_by_name() {
        let e = env(&[("B", "2"), ("C", "3"), ("A", "1")]);
        let names: Vec<&str> = e.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_with_prefix() {
        let e = env(&[("APP_ONE", "1"), ("APP_TWO", "2"), ("OTHER", "3")]);
        let matched: Vec<&str> = e.with_prefix("APP_").map(|(k, _)| k).collect();
        assert_eq!(matched, vec!["APP_ONE", "APP_TWO"]);
    }

    #[test]
    fn test_fallbacks_returns_first_set_value() {
        let e = env(&[("TEST_VAR1", "value1"), ("TEST_VAR2", "value2")]);
        let got = e.get_env_with_fallbacks("default", &["TEST_VAR1", "TEST_VAR2", "TEST_VAR3"]);
        assert_eq!(got, "value1");
    }

    #[test]
    fn test_fallbacks_skip_empty_values() {
        let e = env(&[("TEST_VAR1", ""), ("TEST_VAR2", ""), ("TEST_VAR3", "value3")]);
        let got = e.get_env_with_fallbacks("default", &["TEST_VAR1", "TEST_VAR2", "TEST_VAR3"]);
        assert_eq!(got, "value3");
    }

    #[test]
    fn test_fallbacks_default_when_all_empty_or_missing() {
        let e = env(&[("TEST_VAR1", ""), ("TEST_VAR2", "")]);
        assert_eq!(
            e.get_env_with_fallbacks("default", &["TEST_VAR1", "TEST_VAR2", "TEST_VAR3"]),
            "default"
        );
        assert_eq!(
            Environment::default().get_env_with_fallbacks("default", &["TEST_VAR1"]),
            "default"
        );
    }

    #[test]
    fn test_fallbacks_legacy_classpath() {
        let e = env(&[("UB_CLASSPATH", ""), ("CUB_CLASSPATH", "/custom/classpath/*")]);
        let got = e.get_env_with_fallbacks(
            "/usr/share/java/cp-base-java/*",
            &["UB_CLASSPATH", "CUB_CLASSPATH"],
        );
        assert_eq!(got, "/custom/classpath/*");
    }

    #[test]
    #[serial]
    fn test_capture_reads_process_environment() {
        temp_env::with_vars(
            [
                ("_UB_TEST_CAPTURE_SET", Some("captured")),
                ("_UB_TEST_CAPTURE_UNSET", None),
            ],
            || {
                let e = Environment::capture();
                assert_eq!(e.get("_UB_TEST_CAPTURE_SET"), Some("captured"));
                assert!(!e.contains("_UB_TEST_CAPTURE_UNSET"));
            },
        );
    }
}
