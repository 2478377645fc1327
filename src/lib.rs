//! Chain & Chisel site server
//!
//! A small HTTP server that hosts the workshop's static marketing site and
//! implements the order intake endpoint: JSON submissions are verified
//! against the Turnstile siteverify API and forwarded to the workshop inbox
//! through a transactional email service.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod order;
pub mod server;
