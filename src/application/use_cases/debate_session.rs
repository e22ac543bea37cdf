use std::sync::Arc;

use tracing::info;

use crate::application::CompletionClient;
use crate::domain::{CompletionResult, DomainError, RequestConfig, Transcript, Turn, UserMessage};

pub const GREETING: &str = "Let's start the debate. I answer at about the length of your \
message, in the order \"rebuttal - evidence - advice (optional)\", and if your claim lacks \
evidence I close with one question about it. Set a topic and send a message to begin.";

/// What one submission produced.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// The assistant turn appended to the transcript.
    pub reply: Turn,
    pub result: CompletionResult,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// A conversation with the completion endpoint.
///
/// `submit` takes `&mut self`, so a session never has two requests in flight.
pub struct DebateSession {
    client: Arc<CompletionClient>,
    config: RequestConfig,
    transcript: Transcript,
}

impl DebateSession {
    pub fn new(client: Arc<CompletionClient>, config: RequestConfig) -> Self {
        Self {
            client,
            config,
            transcript: Transcript::with_greeting(GREETING),
        }
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RequestConfig) {
        self.config = config;
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn reset(&mut self) {
        self.transcript.clear();
    }

    /// Sends `text` with the transcript so far as history, then records the
    /// exchange. Blank input is rejected without a request.
    pub async fn submit(&mut self, text: &str) -> Result<SubmitOutcome, DomainError> {
        let message = UserMessage::parse(text)?;

        let result = self
            .client
            .complete(&self.config, self.transcript.turns(), &message)
            .await;

        if let Err(e) = &result {
            info!("Exchange ended with {}: {}", e.kind(), e.message());
        }

        let reply = self.transcript.record_exchange(&message, &result).clone();
        Ok(SubmitOutcome { reply, result })
    }
}
