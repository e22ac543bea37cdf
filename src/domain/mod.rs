//! # Domain Layer
//!
//! Conversation model, prompt construction and the completion error taxonomy.
//! This layer is independent of the HTTP client and the terminal front-end.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
