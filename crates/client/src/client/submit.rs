//! HTTP input submission for [`LogglyClient`].

use crate::client::LogglyClient;
use crate::endpoints::{self, SubmitFormat};
use crate::error::Result;

impl LogglyClient {
    /// Send plain text to an HTTP input. Returns `"<status>:<body>"`.
    pub async fn submit_text_data(&self, text: &str, input_key: &str) -> Result<String> {
        self.submit(text, input_key, SubmitFormat::Text).await
    }

    /// Send a JSON document to an HTTP input. Returns `"<status>:<body>"`.
    pub async fn submit_json_data(&self, json: &str, input_key: &str) -> Result<String> {
        self.submit(json, input_key, SubmitFormat::Json).await
    }

    async fn submit(&self, data: &str, input_key: &str, format: SubmitFormat) -> Result<String> {
        endpoints::submit_data(
            &self.http,
            &self.submit_url,
            &self.auth,
            input_key,
            data.to_string(),
            format,
            self.max_retries,
            self.metrics(),
        )
        .await
    }
}
