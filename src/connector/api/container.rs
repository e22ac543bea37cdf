use std::sync::Arc;

use tracing::debug;

use crate::application::{ChatTransport, CompletionClient, DebateSession};
use crate::connector::{HttpChatTransport, MockTransport};
use crate::domain::{ClientSettings, RequestConfig};

/// Credential used by the offline transport when none is configured.
const MOCK_API_KEY: &str = "mock-key";

pub struct ContainerConfig {
    pub settings: ClientSettings,
    /// Answer from an in-process mock instead of the real endpoint.
    pub mock_transport: bool,
}

/// Wires the transport and the completion client together.
pub struct Container {
    client: Arc<CompletionClient>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let (transport, settings): (Arc<dyn ChatTransport>, ClientSettings) =
            if config.mock_transport {
                debug!("Using mock chat transport");
                let settings = match config.settings.api_key() {
                    Some(_) => config.settings.clone(),
                    None => config.settings.clone().with_api_key(MOCK_API_KEY),
                };
                (Arc::new(MockTransport::new()), settings)
            } else {
                debug!("Using HTTP chat transport at {}", config.settings.endpoint());
                (
                    Arc::new(HttpChatTransport::new(config.settings.endpoint())),
                    config.settings.clone(),
                )
            };

        let client = Arc::new(CompletionClient::new(transport, settings));
        Self { client, config }
    }

    pub fn completion_client(&self) -> Arc<CompletionClient> {
        self.client.clone()
    }

    pub fn session(&self, request_config: RequestConfig) -> DebateSession {
        DebateSession::new(self.client.clone(), request_config)
    }

    pub fn is_mock(&self) -> bool {
        self.config.mock_transport
    }

    pub fn model(&self) -> &str {
        self.client.settings().model()
    }
}
