//! Error types for tarot readings.

use thiserror::Error;

use crate::session::{Notice, Phase};

/// Result type for core tarot operations.
pub type TarotResult<T> = Result<T, TarotError>;

/// Errors that can occur while drawing cards or driving a reading session.
#[derive(Debug, Error)]
pub enum TarotError {
    /// Bad caller input to the deck or prompt builder.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A question was submitted empty or whitespace-only.
    #[error("question is empty")]
    EmptyQuestion,

    /// A reading was requested before any cards were drawn.
    #[error("no cards have been drawn")]
    NoHand,

    /// A reading was requested while the cards are still face down.
    #[error("cards are not revealed yet")]
    CardsNotRevealed,

    /// A reading was requested while another one is outstanding.
    #[error("a reading is already in progress")]
    ReadingInProgress,

    /// The action is not valid in the current phase.
    #[error("cannot {action} while {phase}")]
    OutOfPhase {
        /// What the caller tried to do.
        action: &'static str,
        /// The phase the session was in.
        phase: Phase,
    },

    /// A dataset could not be parsed.
    #[error("malformed dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    /// A dataset file could not be read.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
}

impl TarotError {
    /// The user-facing notice for validation failures, if this is one.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::EmptyQuestion => Some(Notice::EmptyQuestion),
            Self::NoHand => Some(Notice::NoHand),
            Self::CardsNotRevealed => Some(Notice::CardsNotRevealed),
            Self::ReadingInProgress => Some(Notice::ReadingInProgress),
            _ => None,
        }
    }
}
