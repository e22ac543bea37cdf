//! Domain services: pure functions over the conversation model.

mod prompt_builder;

pub use prompt_builder::*;
