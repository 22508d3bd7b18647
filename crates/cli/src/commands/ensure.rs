//! Ensure command implementation.

use anyhow::Result;
use tracing::debug;
use ub_config::Environment;

use crate::error::CommandError;

/// Succeed if `name` is set in the process environment, even to an empty value.
pub fn run(name: &str) -> Result<()> {
    check(&Environment::capture(), name)
}

fn check(env: &Environment, name: &str) -> Result<()> {
    if env.contains(name) {
        debug!(name, "Environment variable is set");
        return Ok(());
    }
    Err(CommandError::CheckFailed(format!("environment variable {name} is not set")).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExitCode, ExitCodeExt};

    #[test]
    fn test_check_reads_snapshot() {
        let env: Environment = [("SET_EMPTY", ""), ("SET", "value")].into_iter().collect();
        assert!(check(&env, "SET").is_ok());
        assert!(check(&env, "SET_EMPTY").is_ok());

        let err = check(&env, "MISSING").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
        assert!(err.to_string().contains("MISSING"));
    }
}
