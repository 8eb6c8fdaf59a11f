//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `LOGGLY_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::{ConfigLoader, PartialCredentials};
use super::error::ConfigError;
use crate::constants::{
    ENV_DOMAIN, ENV_MAX_RETRIES, ENV_PASSWORD, ENV_PROTOCOL, ENV_SUBMIT_URL, ENV_TIMEOUT,
    ENV_USERNAME, MAX_MAX_RETRIES,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    loader.set_env_credentials(PartialCredentials {
        username: env_var_or_none(ENV_USERNAME),
        password: env_var_or_none(ENV_PASSWORD).map(|p| SecretString::new(p.into())),
        domain: env_var_or_none(ENV_DOMAIN),
    });
    loader.set_env_protocol(env_var_or_none(ENV_PROTOCOL));

    if let Some(url) = env_var_or_none(ENV_SUBMIT_URL) {
        loader.set_submit_url(Some(url));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = env_var_or_none(ENV_MAX_RETRIES) {
        let value: usize = retries.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_MAX_RETRIES.to_string(),
            message: "must be a non-negative integer".to_string(),
        })?;
        if value > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
            });
        }
        loader.set_max_retries(Some(value));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::global_test_lock;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_trims_and_filters() {
        let _lock = global_test_lock().lock().unwrap();

        temp_env::with_vars(
            [
                ("LOGGLY_TEST_PADDED", Some("  value  ")),
                ("LOGGLY_TEST_BLANK", Some("   ")),
                ("LOGGLY_TEST_EMPTY", Some("")),
            ],
            || {
                assert_eq!(
                    env_var_or_none("LOGGLY_TEST_PADDED"),
                    Some("value".to_string())
                );
                assert_eq!(env_var_or_none("LOGGLY_TEST_BLANK"), None);
                assert_eq!(env_var_or_none("LOGGLY_TEST_EMPTY"), None);
                assert_eq!(env_var_or_none("LOGGLY_TEST_UNSET_VARIABLE"), None);
            },
        );
    }
}
