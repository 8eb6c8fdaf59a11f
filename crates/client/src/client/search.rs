//! Search API methods for [`LogglyClient`].
//!
//! # What this module handles:
//! - Event searches, returned structured or as raw JSON, XML or text
//! - Faceted searches, with the same set of output forms
//!
//! # What this module does NOT handle:
//! - Query parameter encoding (in [`crate::endpoints::search`])
//! - Result decoding (in [`crate::models::search`])

use serde_json::Value;

use crate::client::LogglyClient;
use crate::endpoints::{self, FacetOptions, SearchFormat, SearchOptions};
use crate::error::Result;
use crate::models::{SearchResult, materialize};
use crate::response::ClassifiedResponse;

impl LogglyClient {
    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
        format: SearchFormat,
    ) -> Result<ClassifiedResponse> {
        tracing::debug!(query, format = format.as_str(), "Searching Loggly events");
        endpoints::search_events(
            &self.http,
            &self.base_url,
            &self.auth,
            query,
            options,
            format,
            self.max_retries,
            self.metrics(),
        )
        .await
    }

    async fn facet_search(
        &self,
        facet_by: &str,
        query: &str,
        options: &FacetOptions,
        format: SearchFormat,
    ) -> Result<ClassifiedResponse> {
        tracing::debug!(facet_by, query, format = format.as_str(), "Running faceted search");
        endpoints::search_events_faceted(
            &self.http,
            &self.base_url,
            &self.auth,
            facet_by,
            query,
            options,
            format,
            self.max_retries,
            self.metrics(),
        )
        .await
    }

    /// Search events and decode them into a [`SearchResult`].
    pub async fn get_events(&self, query: &str, options: &SearchOptions) -> Result<SearchResult> {
        let response = self.search(query, options, SearchFormat::Json).await?;
        materialize(&response, false)
    }

    /// Search events and return the JSON body unparsed.
    pub async fn get_events_json(&self, query: &str, options: &SearchOptions) -> Result<String> {
        let response = self.search(query, options, SearchFormat::Json).await?;
        Ok(response.body_text().to_string())
    }

    /// Search events and return the parsed JSON body.
    pub async fn get_events_value(&self, query: &str, options: &SearchOptions) -> Result<Value> {
        self.search(query, options, SearchFormat::Json).await?.json()
    }

    pub async fn get_events_xml(&self, query: &str, options: &SearchOptions) -> Result<String> {
        let response = self.search(query, options, SearchFormat::Xml).await?;
        Ok(response.body_text().to_string())
    }

    pub async fn get_events_text(&self, query: &str, options: &SearchOptions) -> Result<String> {
        let response = self.search(query, options, SearchFormat::Text).await?;
        Ok(response.body_text().to_string())
    }

    /// Count matches per `facet_by` bucket and decode them into a [`SearchResult`].
    ///
    /// `facet_by` is `date`, `ip`, `input` or any indexed field.
    pub async fn get_events_faceted(
        &self,
        facet_by: &str,
        query: &str,
        options: &FacetOptions,
    ) -> Result<SearchResult> {
        let response = self
            .facet_search(facet_by, query, options, SearchFormat::Json)
            .await?;
        materialize(&response, true)
    }

    pub async fn get_events_faceted_json(
        &self,
        facet_by: &str,
        query: &str,
        options: &FacetOptions,
    ) -> Result<String> {
        let response = self
            .facet_search(facet_by, query, options, SearchFormat::Json)
            .await?;
        Ok(response.body_text().to_string())
    }

    pub async fn get_events_faceted_value(
        &self,
        facet_by: &str,
        query: &str,
        options: &FacetOptions,
    ) -> Result<Value> {
        self.facet_search(facet_by, query, options, SearchFormat::Json)
            .await?
            .json()
    }

    pub async fn get_events_faceted_xml(
        &self,
        facet_by: &str,
        query: &str,
        options: &FacetOptions,
    ) -> Result<String> {
        let response = self
            .facet_search(facet_by, query, options, SearchFormat::Xml)
            .await?;
        Ok(response.body_text().to_string())
    }

    pub async fn get_events_faceted_text(
        &self,
        facet_by: &str,
        query: &str,
        options: &FacetOptions,
    ) -> Result<String> {
        let response = self
            .facet_search(facet_by, query, options, SearchFormat::Text)
            .await?;
        Ok(response.body_text().to_string())
    }
}
