//! Device models for Loggly authorized senders.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::serde_helpers::opt_string_from_number_or_string;

/// A device (an authorized sender IP) attached to one or more inputs.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Device {
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub ip: String,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub input_id: Option<String>,
    pub launched: Option<String>,
    pub resource_uri: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Device {
    /// A device known only by its IP, used to register a new sender.
    pub fn from_ip(ip: impl Into<String>) -> Self {
        Self {
            id: None,
            ip: ip.into(),
            name: None,
            input_id: None,
            launched: None,
            resource_uri: None,
            extra: Map::new(),
        }
    }
}

/// Form parameters for `POST /api/devices/`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub(crate) struct NewDevice<'a> {
    pub input_id: &'a str,
    pub ip: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}
