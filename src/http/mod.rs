//! HTTP protocol layer module
//!
//! Response builders, caching helpers, and MIME detection shared by the
//! static site handler and the order endpoint.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_cached_response, build_health_response, build_json_response, build_options_response,
};
