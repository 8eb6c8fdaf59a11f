//! Loggly REST API client.
//!
//! This crate provides a type-safe client for the Loggly management,
//! submission and retrieval APIs. Every call is a single basic-auth request
//! whose response is classified against Loggly's status table and, for
//! searches, materialized into a [`SearchResult`].

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod models;
pub mod response;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::BasicAuth;
pub use client::LogglyClient;
pub use client::builder::LogglyClientBuilder;
pub use endpoints::{FacetOptions, SearchFormat, SearchOptions};
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    Device, Event, Facet, Input, NewInput, SearchContext, SearchItems, SearchResult, materialize,
};
pub use response::{ClassifiedResponse, RawResponse, STATUS_DESCRIPTORS, StatusDescriptor, classify};
