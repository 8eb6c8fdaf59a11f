//! Connection configuration types for the Loggly client.
//!
//! Responsibilities:
//! - Define connection settings (protocol, timeouts, retries, submission host).
//! - Define the main `Config` structure combining connection and credentials.
//! - Provide serialization helpers for `Duration`.
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - The management API always lives under `<protocol>://<domain>/api`.

use crate::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_PROTOCOL, DEFAULT_SUBMIT_URL, DEFAULT_TIMEOUT_SECS,
};
use crate::types::auth::Credentials;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection settings for a Loggly account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// `https` or `http`.
    pub protocol: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of retries for throttled requests
    pub max_retries: usize,
    /// Host that accepts HTTP input submissions
    pub submit_url: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            submit_url: DEFAULT_SUBMIT_URL.to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub connection: ConnectionConfig,
}

impl Config {
    /// Create a config with explicit credentials and default connection settings.
    pub fn new(username: String, password: SecretString, domain: String) -> Self {
        Self {
            credentials: Credentials::new(username, password, domain),
            connection: ConnectionConfig::default(),
        }
    }

    /// Base URL of the management API, e.g. `https://example.loggly.com/api`.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}/api",
            self.connection.protocol, self.credentials.domain
        )
    }
}
