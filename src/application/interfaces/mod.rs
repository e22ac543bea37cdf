mod chat_transport;

pub use chat_transport::*;
