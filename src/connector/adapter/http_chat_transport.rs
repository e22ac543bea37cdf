use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::{ChatTransport, TransportError, TransportResponse};
use crate::domain::ChatCompletionRequest;

/// [`ChatTransport`] over HTTPS using `reqwest`.
///
/// Sends `POST <endpoint>` with a JSON body and a bearer token. Any status
/// the server answers with comes back as a [`TransportResponse`]; errors from
/// `send()` or from reading the body become a [`TransportError`]. No timeout
/// is set beyond reqwest's defaults.
pub struct HttpChatTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpChatTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn post(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("HttpChatTransport: request to {} failed: {e}", self.endpoint);
                TransportError::new(describe(&e))
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            warn!("HttpChatTransport: failed to read response body: {e}");
            TransportError::new(describe(&e))
        })?;

        debug!("HttpChatTransport: {} answered {status} ({} bytes)", self.endpoint, body.len());

        Ok(TransportResponse { status, body })
    }
}

fn describe(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {e}")
    } else if e.is_connect() {
        format!("could not connect: {e}")
    } else {
        e.to_string()
    }
}
