//! Explicit-value tests for the configuration loader.

use crate::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_SUBMIT_URL, DEFAULT_TIMEOUT_SECS, MAX_MAX_RETRIES,
};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::CredentialSource;
use secrecy::ExposeSecret;
use std::time::Duration;

fn explicit_loader() -> ConfigLoader {
    ConfigLoader::new()
        .with_username("admin".to_string())
        .with_password("secret".to_string())
        .with_domain("example.loggly.com".to_string())
}

#[test]
fn test_explicit_credentials_with_defaults() {
    let config = explicit_loader().build().unwrap();

    assert_eq!(config.credentials.username, "admin");
    assert_eq!(config.credentials.password.expose_secret(), "secret");
    assert_eq!(config.credentials.domain, "example.loggly.com");
    assert_eq!(config.credentials.source, CredentialSource::Explicit);
    assert_eq!(config.connection.protocol, "https");
    assert_eq!(
        config.connection.timeout,
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    );
    assert_eq!(config.connection.max_retries, DEFAULT_MAX_RETRIES);
    assert_eq!(config.connection.submit_url, DEFAULT_SUBMIT_URL);
    assert_eq!(config.base_url(), "https://example.loggly.com/api");
}

#[test]
fn test_partial_explicit_credentials_are_rejected() {
    let result = ConfigLoader::new()
        .with_username("admin".to_string())
        .with_domain("example.loggly.com".to_string())
        .build();

    assert!(matches!(result, Err(ConfigError::MissingCredentials)));
}

#[test]
fn test_protocol_is_normalized() {
    let config = explicit_loader()
        .with_protocol("HTTP".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.protocol, "http");
    assert_eq!(config.base_url(), "http://example.loggly.com/api");
}

#[test]
fn test_unknown_protocol_is_rejected() {
    let result = explicit_loader().with_protocol("ftp".to_string()).build();
    assert!(matches!(result, Err(ConfigError::InvalidProtocol(p)) if p == "ftp"));
}

#[test]
fn test_domain_with_scheme_is_rejected() {
    let result = ConfigLoader::new()
        .with_username("admin".to_string())
        .with_password("secret".to_string())
        .with_domain("https://example.loggly.com".to_string())
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidValue { var, .. }) if var == "domain"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let result = explicit_loader().with_timeout(Duration::ZERO).build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_explicit_max_retries_is_bounded() {
    let config = explicit_loader()
        .with_max_retries(MAX_MAX_RETRIES)
        .build()
        .unwrap();
    assert_eq!(config.connection.max_retries, MAX_MAX_RETRIES);

    let result = explicit_loader()
        .with_max_retries(MAX_MAX_RETRIES + 1)
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidMaxRetries { .. })));

    let result = explicit_loader().with_max_retries(64).build();
    assert!(matches!(result, Err(ConfigError::InvalidMaxRetries { message }) if message.contains("64")));
}

#[test]
fn test_submit_url_trailing_slash_is_trimmed() {
    let config = explicit_loader()
        .with_submit_url("http://127.0.0.1:9999/".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.submit_url, "http://127.0.0.1:9999");
}

#[test]
fn test_missing_credentials_message_does_not_mention_values() {
    let err = ConfigLoader::new()
        .with_password("super-secret".to_string())
        .build()
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("LOGGLY_DOMAIN"));
    assert!(!message.contains("super-secret"));
}
