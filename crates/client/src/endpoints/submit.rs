//! HTTP input submission endpoint.
//!
//! Submissions go to a different host from the management API
//! (`https://logs.loggly.com` for every account) at `/inputs/<input_key>`.
//! The content type tells Loggly how to treat the body.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::auth::BasicAuth;
use crate::endpoints::send_classified;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::metrics::MetricsCollector;

/// How the submitted body should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitFormat {
    #[default]
    Text,
    Json,
}

impl SubmitFormat {
    /// Content type Loggly expects for the format.
    pub fn content_type(&self) -> &'static str {
        match self {
            SubmitFormat::Text => "text/plain",
            SubmitFormat::Json => "application/x-www-form-urlencoded",
        }
    }
}

/// Post data to the HTTP input identified by `input_key`.
///
/// Returns `"<status>:<body>"`.
#[allow(clippy::too_many_arguments)]
pub async fn submit_data(
    client: &Client,
    submit_url: &str,
    auth: &BasicAuth,
    input_key: &str,
    data: String,
    format: SubmitFormat,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<String> {
    let url = format!("{}/inputs/{}", submit_url, encode_path_segment(input_key));
    let builder = auth
        .apply(client.post(&url))
        .header(CONTENT_TYPE, format.content_type())
        .body(data);
    let response = send_classified(builder, max_retries, "/inputs/{key}", "POST", metrics).await?;

    Ok(response.status_line())
}
