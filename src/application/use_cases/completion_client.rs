use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::{ChatTransport, TransportResponse};
use crate::domain::{
    assemble_messages, ChatCompletionRequest, ChatCompletionResponse, ClientSettings,
    CompletionError, CompletionResult, RequestConfig, Turn, UserMessage, API_KEY_VAR,
};

/// Turns one user message into exactly one request to the completion
/// endpoint and classifies the outcome.
///
/// The client holds no conversation state: history is borrowed per call, and
/// nothing is retried or cached. It is safe to share between tasks.
pub struct CompletionClient {
    transport: Arc<dyn ChatTransport>,
    settings: ClientSettings,
}

impl CompletionClient {
    pub fn new(transport: Arc<dyn ChatTransport>, settings: ClientSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// The payload [`CompletionClient::complete`] would send.
    pub fn build_request(
        &self,
        config: &RequestConfig,
        history: &[Turn],
        user_message: &UserMessage,
    ) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.settings.model().to_string(),
            messages: assemble_messages(config, history, user_message),
            temperature: self.settings.temperature(),
        }
    }

    pub async fn complete(
        &self,
        config: &RequestConfig,
        history: &[Turn],
        user_message: &UserMessage,
    ) -> CompletionResult {
        let Some(api_key) = self.settings.api_key() else {
            warn!("No API key configured, skipping completion request");
            return Err(CompletionError::missing_credential(&format!(
                "set {API_KEY_VAR} in the environment"
            )));
        };

        let request = self.build_request(config, history, user_message);
        debug!(
            "Sending {} messages to {} (model {})",
            request.messages.len(),
            self.settings.endpoint(),
            request.model
        );

        let response = match self.transport.post(api_key, &request).await {
            Ok(r) => r,
            Err(e) => {
                warn!("Completion request failed before a response: {e}");
                return Err(CompletionError::network(e));
            }
        };

        Self::interpret(response)
    }

    fn interpret(response: TransportResponse) -> CompletionResult {
        if response.status == 429 {
            warn!("Completion endpoint is rate limiting requests");
            return Err(CompletionError::rate_limited());
        }

        if !response.is_success() {
            warn!(
                "Completion endpoint returned {}: {}",
                response.status, response.body
            );
            return Err(CompletionError::upstream(response.status, &response.body));
        }

        let parsed: Option<ChatCompletionResponse> = serde_json::from_str(&response.body)
            .map_err(|e| {
                warn!("Failed to parse completion response: {e}");
                CompletionError::upstream(response.status, &format!("invalid response body: {e}"))
            })?;
        let Some(parsed) = parsed else {
            info!("Completion endpoint returned a null body");
            return Ok(String::new());
        };

        if let Some(usage) = parsed.usage() {
            debug!(
                "Token usage: prompt={}, completion={}, total={}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        let text = parsed.first_content();
        info!(
            "Completion received ({} choices, {} chars)",
            parsed.choice_count(),
            text.len()
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockTransport;
    use crate::domain::{FailureKind, Role};

    fn client_with(transport: Arc<MockTransport>) -> CompletionClient {
        CompletionClient::new(transport, ClientSettings::new().with_api_key("sk-test"))
    }

    fn message(text: &str) -> UserMessage {
        UserMessage::parse(text).unwrap()
    }

    #[tokio::test]
    async fn test_success_returns_first_choice() {
        let transport = Arc::new(MockTransport::new().with_response(
            200,
            r#"{"choices":[{"message":{"content":"Rebuttal text"}}]}"#,
        ));
        let client = client_with(transport.clone());

        let result = client
            .complete(&RequestConfig::new(), &[], &message("claim"))
            .await;

        assert_eq!(result, Ok("Rebuttal text".to_string()));
        assert_eq!(transport.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_missing_credential_skips_transport() {
        let transport = Arc::new(MockTransport::new());
        let client = CompletionClient::new(transport.clone(), ClientSettings::new());

        let err = client
            .complete(&RequestConfig::new(), &[], &message("claim"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::MissingCredential);
        assert_eq!(transport.call_count().await, 0);
    }

    #[tokio::test]
    async fn test_rate_limit_ignores_body() {
        let transport = Arc::new(MockTransport::new().with_response(
            429,
            r#"{"choices":[{"message":{"content":"not used"}}]}"#,
        ));
        let client = client_with(transport);

        let err = client
            .complete(&RequestConfig::new(), &[], &message("claim"))
            .await
            .unwrap_err();

        assert_eq!(err, CompletionError::rate_limited());
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let transport = Arc::new(MockTransport::new().with_failure("connection refused"));
        let client = client_with(transport);

        let err = client
            .complete(&RequestConfig::new(), &[], &message("claim"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::NetworkError);
        assert!(err.message().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_invalid_json_on_success_is_upstream_error() {
        let transport = Arc::new(MockTransport::new().with_response(200, "<html>oops</html>"));
        let client = client_with(transport);

        let err = client
            .complete(&RequestConfig::new(), &[], &message("claim"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::UpstreamError);
        assert!(err.message().starts_with("200 invalid response body"));
    }

    #[tokio::test]
    async fn test_null_json_on_success_is_empty_answer() {
        for body in ["null", r#"{"choices":null}"#, r#"{"choices":[null]}"#] {
            let transport = Arc::new(MockTransport::new().with_response(200, body));
            let client = client_with(transport);

            let result = client
                .complete(&RequestConfig::new(), &[], &message("claim"))
                .await;

            assert_eq!(result, Ok(String::new()), "body {body}");
        }
    }

    #[tokio::test]
    async fn test_request_carries_settings_and_credential() {
        let transport = Arc::new(MockTransport::new());
        let client = CompletionClient::new(
            transport.clone(),
            ClientSettings::new()
                .with_api_key("sk-abc")
                .with_model("gpt-4o")
                .with_temperature(0.2),
        );

        client
            .complete(&RequestConfig::new(), &[], &message("claim"))
            .await
            .unwrap();

        let requests = transport.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "gpt-4o");
        assert!((requests[0].temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(transport.api_keys().await, vec!["sk-abc".to_string()]);
    }

    #[test]
    fn test_build_request_defaults() {
        let client = client_with(Arc::new(MockTransport::new()));
        let request = client.build_request(&RequestConfig::new(), &[], &message("claim"));

        assert_eq!(request.model, "gpt-4o-mini");
        assert!((request.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role(), Role::System);
    }
}
