//! REST API endpoint implementations.
//!
//! Each function issues exactly one logical call (retrying throttled
//! attempts) and hands the response to [`crate::response::classify`].

pub mod devices;
pub mod inputs;
mod request;
pub mod search;
pub mod submit;
pub mod url_encoding;

pub use devices::{
    add_device_to_input, add_this_device_to_input, delete_device, get_device, list_devices,
    remove_this_device_from_input,
};
pub use inputs::{create_input, delete_input, get_input, list_inputs};
pub use request::{send_classified, send_request_with_retry};
pub use search::{
    FacetOptions, SearchFormat, SearchOptions, search_events, search_events_faceted,
};
pub use submit::{SubmitFormat, submit_data};
