//! Retry helper for HTTP requests with exponential backoff.
//!
//! Loggly answers 503 ("Throttled") when an account sends too many requests.
//! This module retries throttled attempts with exponential backoff and hands
//! back the last response read to completion. Classification happens once,
//! after retries are exhausted.

use std::time::Instant;

use reqwest::RequestBuilder;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::response::{ClassifiedResponse, RawResponse, classify};

/// Sends an HTTP request, retrying throttled (429/503) responses.
///
/// - Backoff is 2^attempt seconds (1s, 2s, 4s, ...)
/// - `max_retries` is the number of extra attempts; 0 means a single attempt
/// - A request whose body cannot be cloned is sent once
///
/// # Errors
///
/// Transport failures are returned as [`ClientError::HttpError`].
/// A throttled response that survives every retry is returned as-is for
/// the classifier to reject.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<RawResponse> {
    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None if attempt == 0 => {
                debug!("Request builder cannot be cloned, single attempt only");
                return send_once(builder, endpoint, method, metrics).await;
            }
            None => {
                debug!("Cannot clone request builder for retry");
                return Err(ClientError::MaxRetriesExceeded(attempt));
            }
        };

        let response = send_once(attempt_builder, endpoint, method, metrics).await?;

        if ClientError::is_retryable_status(response.status()) && attempt < max_retries {
            let backoff_secs = 2u64.pow(attempt as u32);
            debug!(
                attempt = attempt + 1,
                max_retries = max_retries + 1,
                backoff_secs = backoff_secs,
                status = response.status(),
                "Throttled by Loggly, retrying with exponential backoff"
            );
            if let Some(m) = metrics {
                m.record_retry(endpoint, method, attempt + 1);
            }
            tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
            continue;
        }

        if attempt > 0 {
            debug!(attempt = attempt + 1, "Request finished after retry");
        }
        return Ok(response);
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

async fn send_once(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<RawResponse> {
    debug!(endpoint, method, "Sending Loggly request");
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }

    let start = Instant::now();
    let result = match builder.send().await {
        Ok(response) => RawResponse::from_response(response).await,
        Err(e) => Err(ClientError::from(e)),
    };

    if let Some(m) = metrics {
        let status = result.as_ref().ok().map(RawResponse::status);
        m.record_request_duration(endpoint, method, start.elapsed(), status);
    }

    result
}

/// Send a request and classify its response.
pub async fn send_classified(
    builder: RequestBuilder,
    max_retries: usize,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<ClassifiedResponse> {
    let result = send_request_with_retry(builder, max_retries, endpoint, method, metrics)
        .await
        .and_then(classify);

    if let (Err(e), Some(m)) = (&result, metrics) {
        m.record_client_error(endpoint, method, e);
    }

    result
}
