//! Metrics collection for API call performance.
//!
//! This module provides metrics collection for Loggly API calls, including:
//! - Request latency histograms
//! - Request counters (total, retries, errors)
//! - Error categorization
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (install a `metrics` recorder in the application)
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "loggly_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "loggly_api_requests_total";

/// Metric name for retry counter.
pub const METRIC_RETRIES_TOTAL: &str = "loggly_api_retries_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "loggly_api_errors_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, etc.)
    Transport,
    /// Request timeout
    Timeout,
    /// Documented Loggly 4xx failures
    Http4xx,
    /// Documented Loggly 5xx failures
    Http5xx,
    /// Status codes outside Loggly's table
    UnrecognizedStatus,
    /// Bodies that could not be decoded
    Payload,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::UnrecognizedStatus => "unrecognized_status",
            ErrorCategory::Payload => "payload",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Vendor { status, .. } if (400..500).contains(status) => {
                ErrorCategory::Http4xx
            }
            ClientError::Vendor { .. } => ErrorCategory::Http5xx,
            ClientError::UnrecognizedStatus { .. } => ErrorCategory::UnrecognizedStatus,
            ClientError::MalformedPayload(_) => ErrorCategory::Payload,
            ClientError::HttpError(e) if e.is_timeout() => ErrorCategory::Timeout,
            ClientError::HttpError(e) if e.is_connect() => ErrorCategory::Transport,
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for Loggly API calls.
///
/// A thin wrapper around the `metrics` crate macros that keeps label names
/// consistent across endpoints.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is `None` when the request failed before a response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Count one request attempt.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Count one retry of a throttled request.
    pub fn record_retry(&self, endpoint: &str, method: &str, attempt: usize) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_RETRIES_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "attempt" => attempt.to_string(),
        )
        .increment(1);
    }

    /// Count one failed call by category.
    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Count one failed call, deriving the category from the error.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        self.record_error(endpoint, method, ErrorCategory::from(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(status: u16) -> ClientError {
        ClientError::Vendor {
            status,
            message: "m",
            description: "d",
            url: String::new(),
        }
    }

    #[test]
    fn test_error_category_from_client_error() {
        assert_eq!(ErrorCategory::from(&vendor(401)), ErrorCategory::Http4xx);
        assert_eq!(ErrorCategory::from(&vendor(503)), ErrorCategory::Http5xx);
        assert_eq!(
            ErrorCategory::from(&ClientError::UnrecognizedStatus {
                status: 502,
                url: String::new()
            }),
            ErrorCategory::UnrecognizedStatus
        );
        assert_eq!(
            ErrorCategory::from(&ClientError::MalformedPayload("x".to_string())),
            ErrorCategory::Payload
        );
        assert_eq!(
            ErrorCategory::from(&ClientError::NotFound("x".to_string())),
            ErrorCategory::Unknown
        );
    }

    #[test]
    fn test_disabled_collector_is_noop() {
        let collector = MetricsCollector::disabled();
        assert!(!collector.is_enabled());
        collector.record_request("/search", "GET");
        collector.record_request_duration("/search", "GET", Duration::from_millis(5), Some(200));
        collector.record_client_error("/search", "GET", &vendor(500));

        assert!(MetricsCollector::new().is_enabled());
    }
}
