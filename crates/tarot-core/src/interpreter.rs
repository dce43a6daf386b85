//! The seam to the external interpretation service.

use async_trait::async_trait;

use crate::prompt::PromptPayload;

/// Something that turns a prompt into reading text.
///
/// Implementations absorb their own failures and return user-safe text, so
/// the session never needs a failure branch on the display path.
#[async_trait]
pub trait Interpreter: Send + Sync {
    /// Produce the raw reading text for a payload.
    async fn interpret(&self, payload: &PromptPayload) -> String;
}
