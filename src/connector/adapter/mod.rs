mod http_chat_transport;
mod mock_transport;

pub use http_chat_transport::*;
pub use mock_transport::*;
