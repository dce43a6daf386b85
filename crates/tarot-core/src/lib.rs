//! Core types for three-card tarot readings.
//!
//! Provides the card deck and its sampling primitive, the drawn hand, the
//! embedded card/question datasets, the prompt builder and response parser
//! used around the interpretation service, and the session controller that
//! sequences question capture, draw, reveal, interpretation, and reset.

/// Card records and arcana.
pub mod card;
/// Session and timing configuration.
pub mod config;
/// Embedded card and question datasets.
pub mod data;
/// The deck and hand sampling.
pub mod deck;
/// Error types for the core crate.
pub mod error;
/// The three-card hand and its positions.
pub mod hand;
/// The seam to the external interpretation service.
pub mod interpreter;
/// Supported reading languages.
pub mod language;
/// Interpretation request payloads.
pub mod prompt;
/// Sampling without replacement.
pub mod sample;
/// Parsing interpretation text into labeled sections.
pub mod sections;
/// The reading session controller.
pub mod session;

pub use card::{Arcana, Card};
pub use config::{SessionConfig, TimingConfig};
pub use data::QuestionBank;
pub use deck::Deck;
pub use error::{TarotError, TarotResult};
pub use hand::{HAND_SIZE, Hand, Position};
pub use interpreter::Interpreter;
pub use language::Language;
pub use prompt::{ChatMessage, PromptPayload, Role, build_prompt};
pub use sections::{SectionLabel, Sections, parse_sections};
pub use session::{
    Fog, Notice, Overlay, Phase, ReadingTicket, SessionController, SessionEvent, SessionView,
};
