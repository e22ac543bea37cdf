mod completion_client;
mod debate_session;

pub use completion_client::*;
pub use debate_session::*;
