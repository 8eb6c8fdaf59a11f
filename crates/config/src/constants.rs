//! Centralized constants for the Loggly client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Protocol used for the management API when none is configured.
pub const DEFAULT_PROTOCOL: &str = "https";

/// Base URL for HTTP input submission. The same host serves every account.
pub const DEFAULT_SUBMIT_URL: &str = "https://logs.loggly.com";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for throttled requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for `LOGGLY_MAX_RETRIES`.
pub const MAX_MAX_RETRIES: usize = 10;

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_DOMAIN: &str = "LOGGLY_DOMAIN";
pub const ENV_USERNAME: &str = "LOGGLY_USERNAME";
pub const ENV_PASSWORD: &str = "LOGGLY_PASSWORD";
pub const ENV_PROTOCOL: &str = "LOGGLY_PROTOCOL";
pub const ENV_SUBMIT_URL: &str = "LOGGLY_SUBMIT_URL";
pub const ENV_TIMEOUT: &str = "LOGGLY_TIMEOUT";
pub const ENV_MAX_RETRIES: &str = "LOGGLY_MAX_RETRIES";
