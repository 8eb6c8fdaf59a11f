//! Error types for the Loggly client.

use loggly_config::ConfigError;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Loggly client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Loggly answered with one of its documented failure codes.
    ///
    /// Displays exactly as the response's `loggly_info` line.
    #[error("{status}: {message} - {description}")]
    Vendor {
        status: u16,
        message: &'static str,
        description: &'static str,
        url: String,
    },

    /// Loggly answered with a status code missing from its status table.
    #[error("Unrecognized Loggly status code {status} at {url}")]
    UnrecognizedStatus { status: u16, url: String },

    /// The response body could not be decoded into the expected shape.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// A lookup by name or IP found nothing.
    #[error("{0}")]
    NotFound(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request could not be built.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),

    /// Credential or connection configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_timeout() || e.is_connect(),
            Self::Vendor { status, .. } => Self::is_retryable_status(*status),
            _ => false,
        }
    }

    /// Check if an HTTP status code is retryable.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests
    /// - 503: Loggly's "Throttled" response
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 503)
    }

    /// Check if this error came from a documented Loggly failure code.
    pub fn is_vendor_error(&self) -> bool {
        matches!(self, Self::Vendor { .. })
    }

    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Vendor { status, .. } | Self::UnrecognizedStatus { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// URL of the request that produced this error, if known.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Vendor { url, .. } | Self::UnrecognizedStatus { url, .. } => Some(url),
            Self::HttpError(e) => e.url().map(|u| u.as_str()),
            _ => None,
        }
    }
}
