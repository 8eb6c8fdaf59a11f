//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Loggly client against a wiremock server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here never read `LOGGLY_*` environment variables
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::time::Duration;

#[allow(unused_imports)]
pub use loggly_client::testing::{load_fixture, load_fixture_text};

#[allow(unused_imports)]
pub use loggly_client::{BasicAuth, ClientError, LogglyClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use secrecy::SecretString;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "s3cret-pass";

/// A client whose management and submission hosts both point at `server`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> LogglyClient {
    client_with_retries(server, 0)
}

#[allow(dead_code)]
pub fn client_with_retries(server: &MockServer, max_retries: usize) -> LogglyClient {
    LogglyClient::builder()
        .username(USERNAME)
        .password(SecretString::new(PASSWORD.to_string().into()))
        .domain(server.address().to_string())
        .protocol("http")
        .submit_url(server.uri())
        .max_retries(max_retries)
        .ignore_env()
        .build()
        .expect("client should build")
}

/// Management API base URL on `server`, for calling `endpoints::*` directly.
#[allow(dead_code)]
pub fn api_url(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

#[allow(dead_code)]
pub fn test_auth() -> BasicAuth {
    BasicAuth::new(USERNAME, SecretString::new(PASSWORD.to_string().into()))
}

/// Advance Tokio's paused clock and yield so sleepers can observe the change.
#[allow(dead_code)]
pub async fn advance_and_yield(duration: Duration) {
    tokio::time::advance(duration).await;
    tokio::task::yield_now().await;
}

/// Assert that a task has not completed after yielding to the scheduler.
#[allow(dead_code)]
pub async fn assert_pending<T>(handle: &tokio::task::JoinHandle<T>, context: &str) {
    tokio::task::yield_now().await;
    assert!(!handle.is_finished(), "Expected pending task: {}", context);
}
