//! # Application Layer
//!
//! The completion client and the debate session that drives it.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
