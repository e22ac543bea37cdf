use super::{CompletionResult, Turn, UserMessage};

pub const EMPTY_RESPONSE_PLACEHOLDER: &str = "The response was empty.";

/// Caller-owned, append-only conversation log.
///
/// A completion call borrows [`Transcript::turns`] as its history; the
/// exchange is appended afterwards with [`Transcript::record_exchange`].
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    greeting: Option<String>,
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the log with an assistant turn that is forwarded as history
    /// like any other.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        Self {
            turns: vec![Turn::assistant(greeting.clone())],
            greeting: Some(greeting),
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Appends the user turn and exactly one assistant turn describing the
    /// outcome, returning the assistant turn.
    pub fn record_exchange(&mut self, user: &UserMessage, outcome: &CompletionResult) -> &Turn {
        self.turns.push(Turn::user(user.as_str()));

        let reply = match outcome {
            Ok(text) if text.is_empty() => EMPTY_RESPONSE_PLACEHOLDER.to_string(),
            Ok(text) => text.clone(),
            Err(e) => format!("Error: {}", e.message()),
        };
        self.turns.push(Turn::assistant(reply));

        &self.turns[self.turns.len() - 1]
    }

    /// Drops every exchange; the greeting, if any, is kept.
    pub fn clear(&mut self) {
        self.turns.clear();
        if let Some(greeting) = &self.greeting {
            self.turns.push(Turn::assistant(greeting.clone()));
        }
    }
}
