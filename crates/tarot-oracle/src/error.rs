//! Error types for the interpretation client.

use thiserror::Error;

/// Result type for interpretation calls.
pub type InterpretResult<T> = Result<T, InterpretError>;

/// Why an interpretation call failed.
///
/// These never reach the session: the client logs them and substitutes the
/// fallback reading.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// The service answered 429.
    #[error("rate limited by the interpretation service")]
    RateLimited,

    /// The service answered with another non-success status.
    #[error("interpretation service error ({status}): {message}")]
    ServiceError {
        /// HTTP status code.
        status: u16,
        /// Error message from the body, or the raw body.
        message: String,
    },

    /// The service answered 2xx with an unusable body.
    #[error("malformed interpretation response: {0}")]
    MalformedResponse(String),

    /// The request never got a response.
    #[error("interpretation request failed: {0}")]
    Network(String),
}

impl InterpretError {
    /// Short machine-readable kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RateLimited => "rate_limited",
            Self::ServiceError { .. } => "service_error",
            Self::MalformedResponse(_) => "malformed_response",
            Self::Network(_) => "network",
        }
    }
}
