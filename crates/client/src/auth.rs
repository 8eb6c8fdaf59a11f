//! Basic-auth credentials applied to every Loggly request.

use loggly_config::Credentials;
use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Username and password sent with HTTP basic authentication.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    username: String,
    password: SecretString,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Attach the credentials to a request.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}

impl From<&Credentials> for BasicAuth {
    fn from(credentials: &Credentials) -> Self {
        Self::new(credentials.username.clone(), credentials.password.clone())
    }
}
