//! Transports that carry a chat completions request to the service.

use async_trait::async_trait;

use crate::config::OracleConfig;
use crate::error::{InterpretError, InterpretResult};
use crate::wire::ChatCompletionRequest;

/// Status and body of a service response, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl RawResponse {
    /// Build a response from parts.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends one request and returns whatever the service answered.
///
/// Only failures to obtain a response at all are errors here; status codes
/// are judged by [`crate::classify`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request.
    async fn post(&self, request: &ChatCompletionRequest) -> InterpretResult<RawResponse>;
}

/// HTTPS transport backed by `reqwest`.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTransport {
    /// Create a transport for the configured endpoint and credential.
    pub fn new(config: &OracleConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, request: &ChatCompletionRequest) -> InterpretResult<RawResponse> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(InterpretError::ServiceError {
                status: 401,
                message: "no API key configured".to_string(),
            });
        };

        tracing::debug!(endpoint = %self.endpoint, model = %request.model, "sending reading request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| InterpretError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| InterpretError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
