//! Device management API methods for [`LogglyClient`].
//!
//! # What this module handles:
//! - Listing and looking up devices by id, name or IP
//! - Authorizing devices on inputs and removing them
//!
//! # What this module does NOT handle:
//! - Low-level device endpoint HTTP calls (in [`crate::endpoints::devices`])

use crate::client::LogglyClient;
use crate::client::inputs::input_id;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{Device, Input};

impl LogglyClient {
    /// Fetch devices, optionally keeping only those whose IP is in `ips`.
    ///
    /// Filtered results follow the order of `ips`.
    pub async fn get_all_devices(&self, ips: Option<&[&str]>) -> Result<Vec<Device>> {
        let devices = endpoints::list_devices(
            &self.http,
            &self.base_url,
            &self.auth,
            self.max_retries,
            self.metrics(),
        )
        .await?;

        Ok(match ips {
            Some(ips) => filter_by_ips(devices, ips),
            None => devices,
        })
    }

    /// Fetch one device by id.
    pub async fn get_device(&self, device_id: &str) -> Result<Device> {
        endpoints::get_device(
            &self.http,
            &self.base_url,
            &self.auth,
            device_id,
            self.max_retries,
            self.metrics(),
        )
        .await
    }

    /// Find a device by name. The last match wins.
    pub async fn get_device_by_name(&self, name: &str) -> Result<Device> {
        self.get_all_devices(None)
            .await?
            .into_iter()
            .rev()
            .find(|device| device.name.as_deref() == Some(name))
            .ok_or_else(|| ClientError::NotFound(format!("No device found with name: {}", name)))
    }

    pub async fn get_device_id_by_name(&self, name: &str) -> Result<String> {
        let device = self.get_device_by_name(name).await?;
        device_id(&device).map(str::to_string)
    }

    /// Find a device by IP. The last match wins.
    pub async fn get_device_by_ip(&self, ip: &str) -> Result<Device> {
        self.get_all_devices(None)
            .await?
            .into_iter()
            .rev()
            .find(|device| device.ip == ip)
            .ok_or_else(|| ClientError::NotFound(format!("No device found with ip: {}", ip)))
    }

    pub async fn get_device_id_by_ip(&self, ip: &str) -> Result<String> {
        let device = self.get_device_by_ip(ip).await?;
        device_id(&device).map(str::to_string)
    }

    /// Names of every named device on the account.
    pub async fn list_devices(&self) -> Result<Vec<String>> {
        Ok(self
            .get_all_devices(None)
            .await?
            .into_iter()
            .filter_map(|device| device.name)
            .collect())
    }

    /// Authorize `device` to send to `input`.
    pub async fn add_device_to_input(
        &self,
        device: &Device,
        input: &Input,
        name: Option<&str>,
    ) -> Result<Device> {
        tracing::debug!(ip = %device.ip, input = %input.name, "Adding device to input");
        endpoints::add_device_to_input(
            &self.http,
            &self.base_url,
            &self.auth,
            input_id(input)?,
            &device.ip,
            name,
            self.max_retries,
            self.metrics(),
        )
        .await
    }

    pub async fn add_ip_to_input(
        &self,
        ip: &str,
        input: &Input,
        name: Option<&str>,
    ) -> Result<Device> {
        self.add_device_to_input(&Device::from_ip(ip), input, name)
            .await
    }

    /// Authorize `ip` on the input called `input_name`.
    pub async fn add_ip_to_input_by_name(
        &self,
        ip: &str,
        input_name: &str,
        name: Option<&str>,
    ) -> Result<Device> {
        let input = self.get_input_by_name(input_name).await?;
        self.add_ip_to_input(ip, &input, name).await
    }

    /// Authorize the IP this client connects from.
    pub async fn add_this_device_to_input(&self, input: &Input) -> Result<Device> {
        endpoints::add_this_device_to_input(
            &self.http,
            &self.base_url,
            &self.auth,
            input_id(input)?,
            self.max_retries,
            self.metrics(),
        )
        .await
    }

    /// Detach the IP this client connects from. Returns `"<status>:<body>"`.
    pub async fn remove_this_device_from_input(&self, input: &Input) -> Result<String> {
        endpoints::remove_this_device_from_input(
            &self.http,
            &self.base_url,
            &self.auth,
            input_id(input)?,
            self.max_retries,
            self.metrics(),
        )
        .await
    }

    /// Delete a device from every input. Returns `"<status>:<body>"`.
    pub async fn delete_device(&self, device: &Device) -> Result<String> {
        endpoints::delete_device(
            &self.http,
            &self.base_url,
            &self.auth,
            device_id(device)?,
            self.max_retries,
            self.metrics(),
        )
        .await
    }

    pub async fn delete_device_by_ip(&self, ip: &str) -> Result<String> {
        let device = self.get_device_by_ip(ip).await?;
        self.delete_device(&device).await
    }
}

fn device_id(device: &Device) -> Result<&str> {
    device
        .id
        .as_deref()
        .ok_or_else(|| ClientError::InvalidRequest(format!("device '{}' has no id", device.ip)))
}

fn filter_by_ips(devices: Vec<Device>, ips: &[&str]) -> Vec<Device> {
    let mut selected = Vec::new();
    for ip in ips {
        selected.extend(devices.iter().filter(|device| device.ip == *ip).cloned());
    }
    selected
}
