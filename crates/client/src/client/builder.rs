//! Client builder for constructing [`LogglyClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Resolving credentials through [`loggly_config::ConfigLoader`]
//! - Configuring the underlying HTTP client (timeouts, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`LogglyClient`] methods)
//! - Retrying throttled requests (handled by [`crate::endpoints::send_request_with_retry`])
//!
//! # Invariants
//! - A complete explicit credential triple always beats the environment.
//! - Partial explicit credentials are never merged with environment values.
//! - Plain `http` connections log a warning because credentials travel in clear text.

use std::time::Duration;

use loggly_config::{Config, ConfigLoader, constants::DEFAULT_MAX_REDIRECTS};
use secrecy::{ExposeSecret, SecretString};

use crate::auth::BasicAuth;
use crate::client::LogglyClient;
use crate::error::Result;
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`LogglyClient`].
///
/// # Example
///
/// ```rust,ignore
/// use loggly_client::{LogglyClient, MetricsCollector};
/// use secrecy::SecretString;
///
/// let client = LogglyClient::builder()
///     .username("admin")
///     .password(SecretString::new("secret".to_string().into()))
///     .domain("example.loggly.com")
///     .timeout(Duration::from_secs(60))
///     .metrics(MetricsCollector::new())
///     .build()?;
/// ```
pub struct LogglyClientBuilder {
    username: Option<String>,
    password: Option<SecretString>,
    domain: Option<String>,
    protocol: Option<String>,
    submit_url: Option<String>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
    use_env: bool,
    metrics: Option<MetricsCollector>,
}

impl Default for LogglyClientBuilder {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            domain: None,
            protocol: None,
            submit_url: None,
            timeout: None,
            max_retries: None,
            use_env: true,
            metrics: None,
        }
    }
}

impl LogglyClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: SecretString) -> Self {
        self.password = Some(password);
        self
    }

    /// Set the account domain, e.g. `example.loggly.com`.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the management API protocol (`https` or `http`).
    ///
    /// Default is `https`. An explicit protocol is never overridden by
    /// `LOGGLY_PROTOCOL`.
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Set the host that receives HTTP input submissions.
    ///
    /// Default is `https://logs.loggly.com`.
    pub fn submit_url(mut self, url: impl Into<String>) -> Self {
        self.submit_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries for throttled requests.
    ///
    /// Default is 3 retries with exponential backoff (1s, 2s, 4s delays).
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Do not read `LOGGLY_*` environment variables.
    pub fn ignore_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// Set the metrics collector for API call performance tracking.
    ///
    /// When set, the client records request latency, request and retry
    /// counters, and categorized errors.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from an already resolved configuration.
    ///
    /// The environment is not consulted again.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.username = Some(config.credentials.username.clone());
        self.password = Some(config.credentials.password.clone());
        self.domain = Some(config.credentials.domain.clone());
        self.protocol = Some(config.connection.protocol.clone());
        self.submit_url = Some(config.connection.submit_url.clone());
        self.timeout = Some(config.connection.timeout);
        self.max_retries = Some(config.connection.max_retries);
        self.use_env = false;
        self
    }

    fn resolve_config(&mut self) -> Result<Config> {
        let mut loader = ConfigLoader::new();
        if self.use_env {
            loader = loader.from_env()?;
        }
        if let Some(username) = self.username.take() {
            loader = loader.with_username(username);
        }
        if let Some(password) = self.password.take() {
            loader = loader.with_password(password.expose_secret().to_string());
        }
        if let Some(domain) = self.domain.take() {
            loader = loader.with_domain(domain);
        }
        if let Some(protocol) = self.protocol.take() {
            loader = loader.with_protocol(protocol);
        }
        if let Some(url) = self.submit_url.take() {
            loader = loader.with_submit_url(url);
        }
        if let Some(timeout) = self.timeout {
            loader = loader.with_timeout(timeout);
        }
        if let Some(retries) = self.max_retries {
            loader = loader.with_max_retries(retries);
        }

        Ok(loader.build()?)
    }

    /// Build the [`LogglyClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::Config`] if no complete credential triple
    /// is available or a setting is invalid.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(mut self) -> Result<LogglyClient> {
        let config = self.resolve_config()?;

        if config.connection.protocol == "http" {
            tracing::warn!(
                domain = %config.credentials.domain,
                "Using plain HTTP for the Loggly API; credentials are sent unencrypted"
            );
        }

        let http = reqwest::Client::builder()
            .timeout(config.connection.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        Ok(LogglyClient {
            http,
            base_url: config.base_url(),
            submit_url: config.connection.submit_url,
            auth: BasicAuth::from(&config.credentials),
            max_retries: config.connection.max_retries,
            metrics: self.metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use loggly_config::ConfigError;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_build_with_explicit_credentials() {
        let client = LogglyClient::builder()
            .username("admin")
            .password(secret("pw"))
            .domain("example.loggly.com")
            .protocol("http")
            .submit_url("http://localhost:9000/")
            .max_retries(0)
            .ignore_env()
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://example.loggly.com/api");
        assert_eq!(client.submit_url(), "http://localhost:9000");
        assert_eq!(client.max_retries(), 0);
    }

    #[test]
    fn test_build_without_credentials_fails() {
        let err = LogglyClient::builder()
            .username("admin")
            .ignore_env()
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::Config(ConfigError::MissingCredentials)
        ));
    }

    #[test]
    fn test_excessive_max_retries_fails() {
        let err = LogglyClient::builder()
            .username("admin")
            .password(secret("pw"))
            .domain("example.loggly.com")
            .max_retries(64)
            .ignore_env()
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::Config(ConfigError::InvalidMaxRetries { .. })
        ));
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::new(
            "admin".to_string(),
            secret("pw"),
            "example.loggly.com".to_string(),
        );
        config.connection.timeout = Duration::from_secs(120);
        config.connection.max_retries = 5;
        config.connection.submit_url = "https://logs-01.loggly.com".to_string();

        let builder = LogglyClient::builder().from_config(&config);
        assert_eq!(builder.timeout, Some(Duration::from_secs(120)));
        assert!(!builder.use_env);

        let client = builder.build().unwrap();
        assert_eq!(client.base_url(), "https://example.loggly.com/api");
        assert_eq!(client.submit_url(), "https://logs-01.loggly.com");
        assert_eq!(client.max_retries(), 5);
    }
}
