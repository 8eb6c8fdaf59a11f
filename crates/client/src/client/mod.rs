//! Main Loggly API client and API methods.
//!
//! This module provides the primary [`LogglyClient`] for interacting with the
//! Loggly management, submission and retrieval APIs.
//!
//! # Submodules
//! - [`builder`]: Client construction and credential resolution
//! - `inputs`: Input management methods
//! - `devices`: Device management methods
//! - `submit`: HTTP input submission
//! - `search`: Event and faceted search methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Status classification (delegated to [`crate::response`])
//!
//! # Invariants
//! - Every call sends basic-auth credentials; there is no session state.
//! - Every response is classified exactly once before it reaches the caller.

pub mod builder;

mod devices;
mod inputs;
mod search;
mod submit;

use std::fmt;

use crate::auth::BasicAuth;
use crate::metrics::MetricsCollector;

/// Loggly REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use loggly_client::LogglyClient;
/// use secrecy::SecretString;
///
/// let client = LogglyClient::builder()
///     .username("admin")
///     .password(SecretString::new("secret".to_string().into()))
///     .domain("example.loggly.com")
///     .build()?;
///
/// let inputs = client.list_inputs().await?;
/// ```
///
/// When username, password and domain are not all given, the builder falls
/// back to `LOGGLY_USERNAME`, `LOGGLY_PASSWORD` and `LOGGLY_DOMAIN`.
#[derive(Debug)]
pub struct LogglyClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) submit_url: String,
    pub(crate) auth: BasicAuth,
    pub(crate) max_retries: usize,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl LogglyClient {
    /// Create a new client builder.
    pub fn builder() -> builder::LogglyClientBuilder {
        builder::LogglyClientBuilder::new()
    }

    /// Build a client from a `.env` file (if present) and `LOGGLY_*` variables.
    pub fn from_env() -> crate::error::Result<Self> {
        let config = loggly_config::ConfigLoader::new()
            .load_dotenv()?
            .from_env()?
            .build()?;
        Self::builder().from_config(&config).build()
    }

    /// Management API base URL, e.g. `https://example.loggly.com/api`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Host that receives HTTP input submissions.
    pub fn submit_url(&self) -> &str {
        &self.submit_url
    }

    pub fn username(&self) -> &str {
        self.auth.username()
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    fn metrics(&self) -> Option<&MetricsCollector> {
        self.metrics.as_ref()
    }
}

impl fmt::Display for LogglyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Connection:{}@{}", self.auth.username(), self.base_url)
    }
}
