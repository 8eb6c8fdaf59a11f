//! Configuration management for the Loggly client.
//!
//! This crate provides types and loaders for resolving Loggly credentials
//! and connection settings from explicit values and environment variables.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig, CredentialSource, Credentials};
