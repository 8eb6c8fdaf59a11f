//! Data models for Loggly API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod devices;
pub mod inputs;
pub mod search;

pub use devices::Device;
pub use inputs::{Input, NewInput};
pub use search::{Event, Facet, Fields, SearchContext, SearchItems, SearchResult, materialize};
