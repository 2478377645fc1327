//! Request handler module
//!
//! Routes inbound requests to the order intake endpoint, health probes, or
//! the static site.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
