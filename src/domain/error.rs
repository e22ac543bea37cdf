use thiserror::Error;

/// Errors raised before a completion call is attempted. Failures of the call
/// itself are [`CompletionError`](crate::domain::CompletionError)s.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
