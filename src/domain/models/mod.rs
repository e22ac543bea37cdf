mod chat_completion;
mod client_settings;
mod completion;
mod request_config;
mod transcript;
mod turn;
mod user_message;

pub use chat_completion::*;
pub use client_settings::*;
pub use completion::*;
pub use request_config::*;
pub use transcript::*;
pub use turn::*;
pub use user_message::*;
