use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{ChatTransport, TransportError, TransportResponse};
use crate::domain::{ChatCompletionRequest, Role};

type Scripted = Result<TransportResponse, TransportError>;

/// In-process transport. Replays scripted outcomes in order and, once they
/// run out, answers 200 with a canned rebuttal of the last user turn.
/// Every request it sees is recorded.
pub struct MockTransport {
    scripted: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ChatCompletionRequest>>,
    api_keys: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            scripted: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            api_keys: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Ok(TransportResponse::new(status, body)))
    }

    pub fn with_failure(self, reason: impl Into<String>) -> Self {
        self.push(Err(TransportError::new(reason)))
    }

    fn push(mut self, outcome: Scripted) -> Self {
        self.scripted.get_mut().push_back(outcome);
        self
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    pub async fn requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn api_keys(&self) -> Vec<String> {
        self.api_keys.lock().await.clone()
    }

    /// The body the transport returns when nothing is scripted.
    pub fn canned_body(request: &ChatCompletionRequest) -> String {
        let claim = request
            .messages
            .iter()
            .rev()
            .find(|t| t.role() == Role::User)
            .map(|t| t.content())
            .unwrap_or_default();

        let text = format!(
            "Rebuttal: \"{claim}\" leaves out trade-offs worth weighing. \
             Evidence: no source was given to support it. \
             What evidence is this claim based on?"
        );

        serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": text } }]
        })
        .to_string()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn post(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<TransportResponse, TransportError> {
        self.requests.lock().await.push(request.clone());
        self.api_keys.lock().await.push(api_key.to_string());

        let outcome = self.scripted.lock().await.pop_front();
        debug!(
            "Mock transport received {} messages (scripted: {})",
            request.messages.len(),
            outcome.is_some()
        );

        outcome.unwrap_or_else(|| Ok(TransportResponse::new(200, Self::canned_body(request))))
    }
}
