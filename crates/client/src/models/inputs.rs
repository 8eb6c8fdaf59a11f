//! Input models for Loggly log sources.
//!
//! # What this module handles:
//! - Deserialization of inputs returned by `/api/inputs/`
//! - Form parameters for creating an input
//!
//! # What this module does NOT handle:
//! - Direct HTTP API calls (see [`crate::endpoints::inputs`])

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::serde_helpers::opt_string_from_number_or_string;

/// A Loggly input (a configured log-receiving endpoint).
///
/// Keys without a named field are kept in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Input {
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    /// Service type, e.g. `syslogudp`, `http`.
    pub service: Option<String>,
    pub input_type: Option<String>,
    /// Only meaningful for HTTP inputs (`text` or `json`).
    pub format: Option<String>,
    pub created: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub port: Option<String>,
    #[serde(default)]
    pub devices: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Form parameters for `POST /api/inputs/`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct NewInput {
    pub name: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub description: String,
}

impl NewInput {
    /// The description defaults to the input name.
    pub fn new(name: impl Into<String>, service: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: name.clone(),
            name,
            service: service.into(),
            format: None,
        }
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
