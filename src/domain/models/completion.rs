use thiserror::Error;

pub const RATE_LIMITED_MESSAGE: &str = "too many requests, retry later";
pub const NETWORK_ERROR_MESSAGE: &str = "network error, check your connection";
pub const MISSING_CREDENTIAL_MESSAGE: &str = "credential not configured";

/// Outcome of a single completion call. `Ok("")` is a valid, empty answer.
pub type CompletionResult = Result<String, CompletionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    MissingCredential,
    RateLimited,
    UpstreamError,
    NetworkError,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::MissingCredential => "missing_credential",
            FailureKind::RateLimited => "rate_limited",
            FailureKind::UpstreamError => "upstream_error",
            FailureKind::NetworkError => "network_error",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every way a completion call can fail. Each variant carries the message
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("{0}")]
    MissingCredential(String),

    #[error("{0}")]
    RateLimited(String),

    #[error("{0}")]
    UpstreamError(String),

    #[error("{0}")]
    NetworkError(String),
}

impl CompletionError {
    pub fn missing_credential(hint: &str) -> Self {
        Self::MissingCredential(format!("{MISSING_CREDENTIAL_MESSAGE}: {hint}"))
    }

    pub fn rate_limited() -> Self {
        Self::RateLimited(RATE_LIMITED_MESSAGE.to_string())
    }

    /// `<status> <body>`, with the body kept verbatim.
    pub fn upstream(status: u16, body: &str) -> Self {
        Self::UpstreamError(format!("{status} {body}"))
    }

    pub fn network(detail: impl std::fmt::Display) -> Self {
        Self::NetworkError(format!("{NETWORK_ERROR_MESSAGE}: {detail}"))
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::MissingCredential(_) => FailureKind::MissingCredential,
            Self::RateLimited(_) => FailureKind::RateLimited,
            Self::UpstreamError(_) => FailureKind::UpstreamError,
            Self::NetworkError(_) => FailureKind::NetworkError,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::MissingCredential(m)
            | Self::RateLimited(m)
            | Self::UpstreamError(m)
            | Self::NetworkError(m) => m,
        }
    }
}
