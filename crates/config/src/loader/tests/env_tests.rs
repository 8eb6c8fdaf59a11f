//! Environment variable tests for the configuration loader.
//!
//! Responsibilities:
//! - Test precedence between explicit and environment credentials.
//! - Test handling of empty and partial environment triples.
//! - Test numeric environment settings.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::CredentialSource;
use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;

use super::env_lock;

const ENV_TRIPLE: [(&str, Option<&str>); 3] = [
    ("LOGGLY_DOMAIN", Some("env.loggly.com")),
    ("LOGGLY_USERNAME", Some("env-user")),
    ("LOGGLY_PASSWORD", Some("env-pass")),
];

#[test]
#[serial]
fn test_env_credentials_used_when_no_explicit() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(ENV_TRIPLE, || {
        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

        assert_eq!(config.credentials.domain, "env.loggly.com");
        assert_eq!(config.credentials.username, "env-user");
        assert_eq!(config.credentials.password.expose_secret(), "env-pass");
        assert_eq!(config.credentials.source, CredentialSource::Environment);
    });
}

#[test]
#[serial]
fn test_explicit_credentials_override_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(ENV_TRIPLE, || {
        let config = ConfigLoader::new()
            .with_username("admin".to_string())
            .with_password("secret".to_string())
            .with_domain("explicit.loggly.com".to_string())
            .from_env()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.credentials.domain, "explicit.loggly.com");
        assert_eq!(config.credentials.username, "admin");
        assert_eq!(config.credentials.source, CredentialSource::Explicit);
    });
}

#[test]
#[serial]
fn test_partial_explicit_falls_back_to_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(ENV_TRIPLE, || {
        let config = ConfigLoader::new()
            .with_username("admin".to_string())
            .from_env()
            .unwrap()
            .build()
            .unwrap();

        // Triples are never merged across sources
        assert_eq!(config.credentials.username, "env-user");
        assert_eq!(config.credentials.domain, "env.loggly.com");
    });
}

#[test]
#[serial]
fn test_partial_env_triple_is_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("LOGGLY_DOMAIN", Some("env.loggly.com")),
            ("LOGGLY_USERNAME", Some("env-user")),
            ("LOGGLY_PASSWORD", Some("")),
        ],
        || {
            let result = ConfigLoader::new().from_env().unwrap().build();
            assert!(matches!(result, Err(ConfigError::MissingCredentials)));
        },
    );
}

#[test]
#[serial]
fn test_env_protocol_applies_with_env_triple() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("LOGGLY_DOMAIN", Some("env.loggly.com")),
            ("LOGGLY_USERNAME", Some("env-user")),
            ("LOGGLY_PASSWORD", Some("env-pass")),
            ("LOGGLY_PROTOCOL", Some("http")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.base_url(), "http://env.loggly.com/api");
        },
    );
}

#[test]
#[serial]
fn test_env_protocol_ignored_without_env_triple() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("LOGGLY_DOMAIN", None),
            ("LOGGLY_USERNAME", None),
            ("LOGGLY_PASSWORD", None),
            ("LOGGLY_PROTOCOL", Some("http")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_username("admin".to_string())
                .with_password("secret".to_string())
                .with_domain("explicit.loggly.com".to_string())
                .from_env()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(config.connection.protocol, "https");
        },
    );
}

#[test]
#[serial]
fn test_env_timeout_and_retries() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("LOGGLY_DOMAIN", Some("env.loggly.com")),
            ("LOGGLY_USERNAME", Some("env-user")),
            ("LOGGLY_PASSWORD", Some("env-pass")),
            ("LOGGLY_TIMEOUT", Some("90")),
            ("LOGGLY_MAX_RETRIES", Some("5")),
            ("LOGGLY_SUBMIT_URL", Some("http://localhost:8080")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.connection.timeout, Duration::from_secs(90));
            assert_eq!(config.connection.max_retries, 5);
            assert_eq!(config.connection.submit_url, "http://localhost:8080");
        },
    );
}

#[test]
#[serial]
fn test_invalid_env_timeout() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("LOGGLY_TIMEOUT", Some("soon"), || {
        let result = ConfigLoader::new().from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { var, .. }) if var == "LOGGLY_TIMEOUT"
        ));
    });
}

#[test]
#[serial]
fn test_env_max_retries_out_of_range() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("LOGGLY_MAX_RETRIES", Some("50"), || {
        let result = ConfigLoader::new().from_env();
        assert!(matches!(result, Err(ConfigError::InvalidMaxRetries { .. })));
    });
}
