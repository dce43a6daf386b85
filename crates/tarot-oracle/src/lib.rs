//! Interpretation client for tarot readings.
//!
//! Sends a reading prompt to an OpenAI-style chat completions endpoint after a
//! fixed throttle delay, classifies the response, and turns every failure into
//! one user-safe fallback reading. Failure kinds are logged, never returned to
//! the session.

/// The throttled client and its fallback.
pub mod client;
/// Client configuration and environment loading.
pub mod config;
/// Error types for the interpretation client.
pub mod error;
/// Transports that carry requests to the service.
pub mod transport;
/// Request and response bodies, and response classification.
pub mod wire;

pub use client::{FALLBACK_READING, InterpretationClient};
pub use config::OracleConfig;
pub use error::{InterpretError, InterpretResult};
pub use transport::{HttpTransport, RawResponse, Transport};
pub use wire::{ChatCompletionRequest, classify};
