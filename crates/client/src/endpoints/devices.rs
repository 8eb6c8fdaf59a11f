//! Device management endpoints.
//!
//! Devices are sender IPs authorized to log to an input. Deleting a device
//! removes it from every input; removing "this device" only detaches the
//! caller's own IP from one input.

use reqwest::Client;

use crate::auth::BasicAuth;
use crate::endpoints::send_classified;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::Device;
use crate::models::devices::NewDevice;

/// List every device on the account.
pub async fn list_devices(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<Device>> {
    let url = format!("{}/devices/", base_url);
    let builder = auth.apply(client.get(&url));
    let response = send_classified(builder, max_retries, "/devices/", "GET", metrics).await?;

    response.json()
}

/// Fetch one device by id.
pub async fn get_device(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    device_id: &str,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<Device> {
    let url = format!("{}/devices/{}/", base_url, encode_path_segment(device_id));
    let builder = auth.apply(client.get(&url));
    let response =
        send_classified(builder, max_retries, "/devices/{id}/", "GET", metrics).await?;

    response.json()
}

/// Authorize `ip` to send to an input, optionally naming the device.
#[allow(clippy::too_many_arguments)]
pub async fn add_device_to_input(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    input_id: &str,
    ip: &str,
    name: Option<&str>,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<Device> {
    let url = format!("{}/devices/", base_url);
    let form = NewDevice { input_id, ip, name };
    let builder = auth.apply(client.post(&url)).form(&form);
    let response = send_classified(builder, max_retries, "/devices/", "POST", metrics).await?;

    response.json()
}

/// Authorize the IP the request comes from.
pub async fn add_this_device_to_input(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    input_id: &str,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<Device> {
    let url = format!(
        "{}/inputs/{}/adddevice/",
        base_url,
        encode_path_segment(input_id)
    );
    let builder = auth.apply(client.post(&url));
    let response = send_classified(
        builder,
        max_retries,
        "/inputs/{id}/adddevice/",
        "POST",
        metrics,
    )
    .await?;

    response.json()
}

/// Detach the IP the request comes from. Returns `"<status>:<body>"`.
pub async fn remove_this_device_from_input(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    input_id: &str,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<String> {
    let url = format!(
        "{}/inputs/{}/removedevice/",
        base_url,
        encode_path_segment(input_id)
    );
    let builder = auth.apply(client.delete(&url));
    let response = send_classified(
        builder,
        max_retries,
        "/inputs/{id}/removedevice/",
        "DELETE",
        metrics,
    )
    .await?;

    Ok(response.status_line())
}

/// Delete a device from all inputs. Returns `"<status>:<body>"`.
pub async fn delete_device(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    device_id: &str,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<String> {
    let url = format!("{}/devices/{}/", base_url, encode_path_segment(device_id));
    let builder = auth.apply(client.delete(&url));
    let response =
        send_classified(builder, max_retries, "/devices/{id}/", "DELETE", metrics).await?;

    Ok(response.status_line())
}
