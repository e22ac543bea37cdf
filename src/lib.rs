pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    ChatTransport, CompletionClient, DebateSession, SubmitOutcome, TransportError,
    TransportResponse, GREETING,
};

pub use connector::{Container, ContainerConfig, HttpChatTransport, MockTransport};

pub use domain::{
    assemble_messages, build_system_prompt, ChatCompletionRequest, ChatCompletionResponse,
    ClientSettings, CompletionError, CompletionResult, DomainError, FailureKind, RequestConfig,
    Role, Stance, Transcript, Turn, UserMessage,
};
