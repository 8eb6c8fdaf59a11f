//! Input management API methods for [`LogglyClient`].
//!
//! # What this module handles:
//! - Listing and looking up inputs by id or name
//! - Creating and deleting inputs
//!
//! # What this module does NOT handle:
//! - Low-level input endpoint HTTP calls (in [`crate::endpoints::inputs`])

use crate::client::LogglyClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{Input, NewInput};

impl LogglyClient {
    /// Fetch inputs, optionally keeping only those whose name is in `names`.
    ///
    /// With a name filter the result follows the order of `names`; inputs
    /// sharing a name keep the order Loggly returned them in.
    pub async fn get_all_inputs(&self, names: Option<&[&str]>) -> Result<Vec<Input>> {
        let inputs = endpoints::list_inputs(
            &self.http,
            &self.base_url,
            &self.auth,
            self.max_retries,
            self.metrics(),
        )
        .await?;

        Ok(match names {
            Some(names) => filter_by_names(inputs, names),
            None => inputs,
        })
    }

    /// Fetch one input by id.
    pub async fn get_input(&self, input_id: &str) -> Result<Input> {
        endpoints::get_input(
            &self.http,
            &self.base_url,
            &self.auth,
            input_id,
            self.max_retries,
            self.metrics(),
        )
        .await
    }

    /// Find an input by name. When several inputs share the name, the last one wins.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if no input has that name.
    pub async fn get_input_by_name(&self, name: &str) -> Result<Input> {
        self.get_all_inputs(None)
            .await?
            .into_iter()
            .rev()
            .find(|input| input.name == name)
            .ok_or_else(|| ClientError::NotFound(format!("No input found with name: {}", name)))
    }

    pub async fn get_input_id_by_name(&self, name: &str) -> Result<String> {
        let input = self.get_input_by_name(name).await?;
        input_id(&input).map(str::to_string)
    }

    /// Names of every input on the account.
    pub async fn list_inputs(&self) -> Result<Vec<String>> {
        Ok(self
            .get_all_inputs(None)
            .await?
            .into_iter()
            .map(|input| input.name)
            .collect())
    }

    /// Create an input. The description defaults to the name.
    pub async fn create_input(
        &self,
        name: &str,
        service: &str,
        format: Option<&str>,
        description: Option<&str>,
    ) -> Result<Input> {
        let mut params = NewInput::new(name, service);
        if let Some(format) = format {
            params = params.format(format);
        }
        if let Some(description) = description {
            params = params.description(description);
        }

        tracing::debug!(name, service, "Creating Loggly input");
        endpoints::create_input(
            &self.http,
            &self.base_url,
            &self.auth,
            &params,
            self.max_retries,
            self.metrics(),
        )
        .await
    }

    /// Delete an input. Returns `"<status>:<body>"`.
    pub async fn delete_input(&self, input: &Input) -> Result<String> {
        endpoints::delete_input(
            &self.http,
            &self.base_url,
            &self.auth,
            input_id(input)?,
            self.max_retries,
            self.metrics(),
        )
        .await
    }
}

pub(crate) fn input_id(input: &Input) -> Result<&str> {
    input.id.as_deref().ok_or_else(|| {
        ClientError::InvalidRequest(format!("input '{}' has no id", input.name))
    })
}

fn filter_by_names(inputs: Vec<Input>, names: &[&str]) -> Vec<Input> {
    let mut selected = Vec::new();
    for name in names {
        selected.extend(inputs.iter().filter(|input| input.name == *name).cloned());
    }
    selected
}
