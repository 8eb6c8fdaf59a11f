//! Configuration type definitions for the Loggly client.
//!
//! Responsibilities:
//! - Define credential and connection types.
//! - Provide serialization helpers for durations.
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Passwords are held as `secrecy::SecretString` and never appear in `Debug` output.

mod auth;
mod connection;

pub use auth::{CredentialSource, Credentials};
pub use connection::{Config, ConnectionConfig};
