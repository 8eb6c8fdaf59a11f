//! Loggly account credentials.

use secrecy::SecretString;

/// Where a resolved set of credentials came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Passed to the loader by the caller.
    Explicit,
    /// Read from `LOGGLY_DOMAIN`, `LOGGLY_USERNAME` and `LOGGLY_PASSWORD`.
    Environment,
}

/// Basic-auth credentials and the account domain they belong to.
///
/// The domain is the account subdomain host, e.g. `example.loggly.com`.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
    pub domain: String,
    pub source: CredentialSource,
}

impl Credentials {
    /// Create explicit credentials.
    pub fn new(username: String, password: SecretString, domain: String) -> Self {
        Self {
            username,
            password,
            domain,
            source: CredentialSource::Explicit,
        }
    }
}
