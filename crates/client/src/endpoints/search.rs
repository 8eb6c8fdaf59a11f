//! Search endpoints.
//!
//! # What this module handles:
//! - Event searches against `/api/search`
//! - Faceted searches against `/api/facets/<facet>/`
//! - Query parameter construction from [`SearchOptions`] and [`FacetOptions`]
//!
//! # What this module does NOT handle:
//! - Decoding results (see [`crate::models::search`])
//!
//! # Invariants
//! - Only options that are set are sent; `q` and `format` are always sent.

use reqwest::Client;

use crate::auth::BasicAuth;
use crate::endpoints::send_classified;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::response::ClassifiedResponse;

/// Output format requested from Loggly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFormat {
    #[default]
    Json,
    Xml,
    Text,
}

impl SearchFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchFormat::Json => "json",
            SearchFormat::Xml => "xml",
            SearchFormat::Text => "text",
        }
    }
}

/// Optional parameters for an event search.
///
/// `from` and `until` accept Loggly time expressions such as `-24h` or `now`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub rows: Option<u64>,
    pub start: Option<u64>,
    pub from: Option<String>,
    pub until: Option<String>,
    /// `asc` or `desc`.
    pub order: Option<String>,
    /// JSONP callback name.
    pub callback: Option<String>,
    /// Comma-separated list of fields to return.
    pub fields: Option<String>,
}

impl SearchOptions {
    /// Build the query string parameters for a search.
    pub fn to_query_params(&self, query: &str, format: SearchFormat) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", query.to_string())];

        if let Some(rows) = self.rows {
            params.push(("rows", rows.to_string()));
        }
        if let Some(start) = self.start {
            params.push(("start", start.to_string()));
        }
        push_opt(&mut params, "from", &self.from);
        push_opt(&mut params, "until", &self.until);
        push_opt(&mut params, "order", &self.order);
        push_opt(&mut params, "callback", &self.callback);
        params.push(("format", format.as_str().to_string()));
        push_opt(&mut params, "fields", &self.fields);

        params
    }
}

/// Optional parameters for a faceted search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub from: Option<String>,
    pub until: Option<String>,
    /// Number of buckets for date facets.
    pub buckets: Option<u64>,
    /// Bucket width for date facets, e.g. `+1HOUR`.
    pub gap: Option<String>,
    pub callback: Option<String>,
}

impl FacetOptions {
    /// Build the query string parameters for a faceted search.
    pub fn to_query_params(&self, query: &str, format: SearchFormat) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", query.to_string())];

        push_opt(&mut params, "from", &self.from);
        push_opt(&mut params, "until", &self.until);
        if let Some(buckets) = self.buckets {
            params.push(("buckets", buckets.to_string()));
        }
        push_opt(&mut params, "gap", &self.gap);
        push_opt(&mut params, "callback", &self.callback);
        params.push(("format", format.as_str().to_string()));

        params
    }
}

fn push_opt(params: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        params.push((key, v.clone()));
    }
}

/// Run an event search.
#[allow(clippy::too_many_arguments)]
pub async fn search_events(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    query: &str,
    options: &SearchOptions,
    format: SearchFormat,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<ClassifiedResponse> {
    let url = format!("{}/search", base_url);
    let builder = auth
        .apply(client.get(&url))
        .query(&options.to_query_params(query, format));

    send_classified(builder, max_retries, "/search", "GET", metrics).await
}

/// Run a faceted search, bucketing matches by `facet_by` (e.g. `date`, `ip`, `input`).
#[allow(clippy::too_many_arguments)]
pub async fn search_events_faceted(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    facet_by: &str,
    query: &str,
    options: &FacetOptions,
    format: SearchFormat,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<ClassifiedResponse> {
    let url = format!("{}/facets/{}/", base_url, encode_path_segment(facet_by));
    let builder = auth
        .apply(client.get(&url))
        .query(&options.to_query_params(query, format));

    send_classified(builder, max_retries, "/facets/{facet}/", "GET", metrics).await
}
