use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ChatCompletionRequest;

/// A completed HTTP exchange, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request failed before a full response was received (DNS, refused
/// connection, timeout, broken body stream).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Sends one chat-completion payload to the endpoint.
///
/// Implementors own the wire details; a received status code of any kind is
/// returned as `Ok`, and only a missing response is an `Err`. Interpreting
/// the status is left to [`crate::application::CompletionClient`].
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn post(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<TransportResponse, TransportError>;
}
