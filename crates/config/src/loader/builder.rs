//! Builder that resolves Loggly credentials and connection settings.
//!
//! Responsibilities:
//! - Collect explicit values and environment values separately.
//! - Resolve which credential triple wins and validate the result.
//!
//! Invariants / Assumptions:
//! - Credentials are only used as a complete triple (username, password, domain).
//! - Explicit credentials beat environment credentials.
//! - `LOGGLY_PROTOCOL` only applies when the environment triple is complete,
//!   and never overrides a protocol set with `with_protocol`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - `max_retries` never exceeds `MAX_MAX_RETRIES`, whatever its source.

use secrecy::SecretString;
use std::time::Duration;
use url::Url;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_PROTOCOL, DEFAULT_SUBMIT_URL, DEFAULT_TIMEOUT_SECS,
    MAX_MAX_RETRIES, MAX_TIMEOUT_SECS,
};
use crate::types::{Config, ConnectionConfig, CredentialSource, Credentials};

/// Credential fields from a single source, any of which may be missing.
#[derive(Debug, Clone, Default)]
pub(crate) struct PartialCredentials {
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub domain: Option<String>,
}

impl PartialCredentials {
    fn into_complete(self, source: CredentialSource) -> Option<Credentials> {
        match (self.username, self.password, self.domain) {
            (Some(username), Some(password), Some(domain)) => Some(Credentials {
                username,
                password,
                domain,
                source,
            }),
            _ => None,
        }
    }

    fn is_complete(&self) -> bool {
        self.username.is_some() && self.password.is_some() && self.domain.is_some()
    }
}

/// Configuration loader that builds config from explicit values and the environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    explicit: PartialCredentials,
    env: PartialCredentials,
    protocol: Option<String>,
    env_protocol: Option<String>,
    submit_url: Option<String>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
}

impl ConfigLoader {
    /// Create a new empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `LOGGLY_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.explicit.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.explicit.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the account domain, e.g. `example.loggly.com`.
    pub fn with_domain(mut self, domain: String) -> Self {
        self.explicit.domain = Some(domain);
        self
    }

    /// Set the protocol used for the management API.
    pub fn with_protocol(mut self, protocol: String) -> Self {
        self.protocol = Some(protocol);
        self
    }

    /// Set the submission host (defaults to `https://logs.loggly.com`).
    pub fn with_submit_url(mut self, url: String) -> Self {
        self.submit_url = Some(url);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    pub(crate) fn set_env_credentials(&mut self, credentials: PartialCredentials) {
        self.env = credentials;
    }

    pub(crate) fn set_env_protocol(&mut self, protocol: Option<String>) {
        self.env_protocol = protocol;
    }

    pub(crate) fn set_submit_url(&mut self, url: Option<String>) {
        self.submit_url = url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let env_complete = self.env.is_complete();

        let credentials = match self.explicit.into_complete(CredentialSource::Explicit) {
            Some(credentials) => credentials,
            None => self
                .env
                .into_complete(CredentialSource::Environment)
                .ok_or(ConfigError::MissingCredentials)?,
        };

        if credentials.source == CredentialSource::Environment {
            tracing::debug!(
                domain = %credentials.domain,
                "Using Loggly credentials from environment"
            );
        }

        let protocol = match (self.protocol, self.env_protocol) {
            (Some(p), _) => p,
            (None, Some(p)) if env_complete => p,
            _ => DEFAULT_PROTOCOL.to_string(),
        };
        let protocol = validate_protocol(&protocol)?;
        validate_domain(&protocol, &credentials.domain)?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        let max_retries = self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES);
        validate_max_retries(max_retries)?;

        let submit_url = validate_submit_url(
            self.submit_url
                .as_deref()
                .unwrap_or(DEFAULT_SUBMIT_URL),
        )?;

        Ok(Config {
            credentials,
            connection: ConnectionConfig {
                protocol,
                timeout,
                max_retries,
                submit_url,
            },
        })
    }
}

fn validate_protocol(protocol: &str) -> Result<String, ConfigError> {
    let normalized = protocol.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "https" | "http" => Ok(normalized),
        _ => Err(ConfigError::InvalidProtocol(protocol.to_string())),
    }
}

fn validate_domain(protocol: &str, domain: &str) -> Result<(), ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        var: "domain".to_string(),
        message: message.to_string(),
    };

    if domain.contains('/') {
        return Err(invalid("must be a host name without a path or scheme"));
    }
    let parsed = Url::parse(&format!("{protocol}://{domain}/api"))
        .map_err(|e| invalid(&e.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(invalid("must contain a host"));
    }
    Ok(())
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 || secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!("must be between 1 and {} seconds (got {})", MAX_TIMEOUT_SECS, secs),
        });
    }
    Ok(())
}

fn validate_max_retries(retries: usize) -> Result<(), ConfigError> {
    if retries > MAX_MAX_RETRIES {
        return Err(ConfigError::InvalidMaxRetries {
            message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, retries),
        });
    }
    Ok(())
}

fn validate_submit_url(url: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidValue {
        var: "submit_url".to_string(),
        message: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidProtocol(parsed.scheme().to_string()));
    }
    Ok(url.trim_end_matches('/').to_string())
}
