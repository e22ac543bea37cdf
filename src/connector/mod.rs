//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat transports (reqwest over HTTPS, in-process mock)
//! - Dependency wiring for the terminal front-end

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
