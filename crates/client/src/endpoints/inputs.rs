//! Input management endpoints.
//!
//! # What this module handles:
//! - GET requests to list and fetch inputs
//! - POST requests to create inputs (form encoded)
//! - DELETE requests to remove inputs
//!
//! # What this module does NOT handle:
//! - Filtering and name lookups (see [`crate::client`])

use reqwest::Client;

use crate::auth::BasicAuth;
use crate::endpoints::send_classified;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{Input, NewInput};

/// List every input on the account.
pub async fn list_inputs(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<Input>> {
    let url = format!("{}/inputs/", base_url);
    let builder = auth.apply(client.get(&url));
    let response = send_classified(builder, max_retries, "/inputs/", "GET", metrics).await?;

    response.json()
}

/// Fetch one input by id.
pub async fn get_input(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    input_id: &str,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<Input> {
    let url = format!("{}/inputs/{}/", base_url, encode_path_segment(input_id));
    let builder = auth.apply(client.get(&url));
    let response = send_classified(builder, max_retries, "/inputs/{id}/", "GET", metrics).await?;

    response.json()
}

/// Create an input.
///
/// `format` is only sent when set; Loggly treats a missing format as text.
pub async fn create_input(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    params: &NewInput,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<Input> {
    let url = format!("{}/inputs/", base_url);
    let builder = auth.apply(client.post(&url)).form(params);
    let response = send_classified(builder, max_retries, "/inputs/", "POST", metrics).await?;

    response.json()
}

/// Delete an input. Returns `"<status>:<body>"`.
pub async fn delete_input(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    input_id: &str,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<String> {
    let url = format!("{}/inputs/{}/", base_url, encode_path_segment(input_id));
    let builder = auth.apply(client.delete(&url));
    let response =
        send_classified(builder, max_retries, "/inputs/{id}/", "DELETE", metrics).await?;

    Ok(response.status_line())
}
