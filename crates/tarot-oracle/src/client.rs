//! Throttled interpretation client.

use async_trait::async_trait;

use tarot_core::{Interpreter, PromptPayload};

use crate::config::OracleConfig;
use crate::error::InterpretResult;
use crate::transport::{HttpTransport, Transport};
use crate::wire::{ChatCompletionRequest, classify};

/// Reading text substituted for every failed request.
pub const FALLBACK_READING: &str =
    "Sorry, I couldn't generate a tarot reading. Please try again later.";

/// Sends reading prompts to the interpretation service.
///
/// Every request waits for the configured throttle before dispatch. Failures
/// are logged and replaced with [`FALLBACK_READING`].
pub struct InterpretationClient<T = HttpTransport> {
    transport: T,
    config: OracleConfig,
}

impl InterpretationClient<HttpTransport> {
    /// Create an HTTP client from explicit settings.
    pub fn from_config(config: OracleConfig) -> Self {
        let transport = HttpTransport::new(&config);
        Self { transport, config }
    }

    /// Create an HTTP client from environment variables.
    pub fn from_env() -> Self {
        Self::from_config(OracleConfig::from_env())
    }
}

impl<T: Transport> InterpretationClient<T> {
    /// Create a client over any transport.
    pub fn with_transport(transport: T, config: OracleConfig) -> Self {
        Self { transport, config }
    }

    /// Client settings.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Throttle, send, and classify; errors are returned as-is.
    pub async fn try_request(&self, payload: &PromptPayload) -> InterpretResult<String> {
        if !self.config.throttle.is_zero() {
            tokio::time::sleep(self.config.throttle).await;
        }

        let request =
            ChatCompletionRequest::new(payload, &self.config.model, self.config.max_tokens);
        let response = self.transport.post(&request).await?;
        classify(response.status, &response.body)
    }

    /// Throttle, send, and classify; any failure yields [`FALLBACK_READING`].
    pub async fn request(&self, payload: &PromptPayload) -> String {
        match self.try_request(payload).await {
            Ok(text) => {
                tracing::info!(chars = text.len(), "reading received");
                text
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "reading request failed");
                FALLBACK_READING.to_string()
            }
        }
    }
}

#[async_trait]
impl<T: Transport> Interpreter for InterpretationClient<T> {
    async fn interpret(&self, payload: &PromptPayload) -> String {
        self.request(payload).await
    }
}
