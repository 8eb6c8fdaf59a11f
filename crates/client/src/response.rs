//! Classification of raw Loggly responses.
//!
//! Every HTTP response the client receives passes through [`classify`] exactly
//! once. The status code is looked up in Loggly's fixed status table and the
//! matching message and description are attached to the response.
//!
//! # What this module handles:
//! - The 12-entry status table ([`STATUS_DESCRIPTORS`])
//! - Rejecting documented failure codes with [`ClientError::Vendor`]
//! - Rejecting codes outside the table with [`ClientError::UnrecognizedStatus`]
//!
//! # What this module does NOT handle:
//! - Sending requests or retrying throttled ones (see [`crate::endpoints`])
//! - Decoding search payloads (see [`crate::models::search`])
//!
//! # Invariants
//! - A [`ClassifiedResponse`] only exists for a status code in the table that is
//!   not a failure code, and its derived fields never change after construction.

use std::fmt;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// Loggly's description of one HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDescriptor {
    pub code: u16,
    pub message: &'static str,
    pub description: &'static str,
}

/// Status codes Loggly documents for its API.
pub const STATUS_DESCRIPTORS: [StatusDescriptor; 12] = [
    StatusDescriptor {
        code: 200,
        message: "OK",
        description: "Indicates that the request was successful.",
    },
    StatusDescriptor {
        code: 201,
        message: "Created",
        description: "The object was successfully created. This is for a POST call.",
    },
    StatusDescriptor {
        code: 204,
        message: "Deleted",
        description: "The object was deleted. This pertains to DELETE calls.",
    },
    StatusDescriptor {
        code: 400,
        message: "Bad Request",
        description: "Check your request parameters. You might be using an unsupported \
                      parameter or have a malformed something or another.",
    },
    StatusDescriptor {
        code: 401,
        message: "Unauthorized",
        description: "Either your credentials specified were invalid.",
    },
    StatusDescriptor {
        code: 403,
        message: "Forbidden",
        description: "User does not have privileges to execute the action.",
    },
    StatusDescriptor {
        code: 404,
        message: "Not Found",
        description: "The resource you have referenced could not be found.",
    },
    StatusDescriptor {
        code: 409,
        message: "Conflict/Duplicate",
        description: "There was some conflict. Most likely you are \
                      trying to create a resource that already exists.",
    },
    StatusDescriptor {
        code: 410,
        message: "Gone",
        description: "You have referenced an object that does not exist.",
    },
    StatusDescriptor {
        code: 500,
        message: "Internal Server Error",
        description: "There has been an error from which Loggly could not \
                      recover. We are likely notified when this happens.",
    },
    StatusDescriptor {
        code: 501,
        message: "Not Implemented",
        description: "You are trying to access functionality that \
                      is not implemented. Yet.",
    },
    StatusDescriptor {
        code: 503,
        message: "Throttled",
        description: "Like a needy child, you are overloading \
                      us with requests for events. Try again later.",
    },
];

/// Codes in the table that are reported as failures.
pub const FAILURE_CODES: [u16; 9] = [400, 401, 403, 404, 409, 410, 500, 501, 503];

impl StatusDescriptor {
    /// Find the descriptor for a status code.
    pub fn lookup(code: u16) -> Option<&'static StatusDescriptor> {
        STATUS_DESCRIPTORS.iter().find(|d| d.code == code)
    }

    /// Whether Loggly treats this code as a failed call.
    pub fn is_failure(&self) -> bool {
        FAILURE_CODES.contains(&self.code)
    }

    /// `"<code>: <message> - <description>"`.
    pub fn info(&self) -> String {
        format!("{}: {} - {}", self.code, self.message, self.description)
    }
}

/// A response as it came off the wire, with the body already read.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    status: u16,
    url: String,
    headers: HeaderMap,
    body: String,
}

impl RawResponse {
    pub fn new(status: u16, url: impl Into<String>, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            url: url.into(),
            headers,
            body: body.into(),
        }
    }

    /// Read a `reqwest` response to completion.
    pub async fn from_response(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self {
            status,
            url,
            headers,
            body,
        })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// A successful response annotated with Loggly's status information.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedResponse {
    raw: RawResponse,
    descriptor: &'static StatusDescriptor,
    loggly_info: String,
}

impl ClassifiedResponse {
    pub fn status_code(&self) -> u16 {
        self.raw.status
    }

    pub fn body_text(&self) -> &str {
        &self.raw.body
    }

    pub fn loggly_message(&self) -> &'static str {
        self.descriptor.message
    }

    pub fn loggly_description(&self) -> &'static str {
        self.descriptor.description
    }

    pub fn loggly_info(&self) -> &str {
        &self.loggly_info
    }

    /// The underlying transport response, for anything classification does not cover.
    pub fn raw(&self) -> &RawResponse {
        &self.raw
    }

    pub fn into_raw(self) -> RawResponse {
        self.raw
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.raw.headers
    }

    pub fn url(&self) -> &str {
        &self.raw.url
    }

    /// `"<code>:<body>"`, the summary returned by delete and submit calls.
    pub fn status_line(&self) -> String {
        format!("{}:{}", self.raw.status, self.raw.body)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.raw.body).map_err(|e| {
            ClientError::MalformedPayload(format!("{} (HTTP {})", e, self.raw.status))
        })
    }
}

impl fmt::Display for ClassifiedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Response: {}", self.loggly_info)
    }
}

/// Attach Loggly status information to a response, rejecting failures.
///
/// # Errors
///
/// - [`ClientError::UnrecognizedStatus`] when the code is not in the table.
/// - [`ClientError::Vendor`] when the code is one of [`FAILURE_CODES`].
pub fn classify(raw: RawResponse) -> Result<ClassifiedResponse> {
    let descriptor =
        StatusDescriptor::lookup(raw.status).ok_or_else(|| ClientError::UnrecognizedStatus {
            status: raw.status,
            url: raw.url.clone(),
        })?;

    if descriptor.is_failure() {
        return Err(ClientError::Vendor {
            status: descriptor.code,
            message: descriptor.message,
            description: descriptor.description,
            url: raw.url,
        });
    }

    Ok(ClassifiedResponse {
        loggly_info: descriptor.info(),
        descriptor,
        raw,
    })
}
