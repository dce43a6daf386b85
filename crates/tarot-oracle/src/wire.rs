//! Chat completions request/response bodies and response classification.

use serde::{Deserialize, Serialize};

use tarot_core::{ChatMessage, PromptPayload};

use crate::error::{InterpretError, InterpretResult};

/// Request body for the chat completions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier.
    pub model: String,
    /// Ordered conversation messages.
    pub messages: Vec<ChatMessage>,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl ChatCompletionRequest {
    /// Wrap a prompt payload with model settings.
    pub fn new(payload: &PromptPayload, model: &str, max_tokens: u32) -> Self {
        Self {
            model: model.to_string(),
            messages: payload.messages.clone(),
            max_tokens,
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Turn a status code and body into the reading text or a failure kind.
///
/// 429 is rate limiting; any other non-2xx is a service error; a 2xx without
/// a first choice carrying content is malformed.
pub fn classify(status: u16, body: &str) -> InterpretResult<String> {
    if status == 429 {
        return Err(InterpretError::RateLimited);
    }

    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|wrapper| wrapper.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        return Err(InterpretError::ServiceError { status, message });
    }

    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|err| InterpretError::MalformedResponse(err.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| InterpretError::MalformedResponse("response has no choices".into()))
}
