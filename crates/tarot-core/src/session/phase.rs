//! Session phases and the presentation state scoped to them.

use serde::{Deserialize, Serialize};

use crate::hand::Hand;
use crate::language::Language;
use crate::sections::Sections;

/// Where a reading session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a question.
    Idle,
    /// Cards drawn, still face down.
    Drawing,
    /// Cards face up; a reading can be requested.
    Revealed,
    /// Interpretation request in flight.
    AwaitingInterpretation,
    /// Interpretation parsed and on screen.
    Displaying,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Drawing => write!(f, "drawing"),
            Self::Revealed => write!(f, "revealed"),
            Self::AwaitingInterpretation => write!(f, "awaiting interpretation"),
            Self::Displaying => write!(f, "displaying"),
        }
    }
}

/// State of the fog effect over the reading overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fog {
    /// Fully covering the overlay.
    Active,
    /// Fading out.
    Fading,
    /// Gone.
    Cleared,
}

/// The reading overlay, open while a reading is requested or shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    /// Whether the interpretation text is visible.
    pub text_visible: bool,
    /// The fog effect.
    pub fog: Fog,
}

impl Overlay {
    /// A freshly opened overlay: text hidden under active fog.
    pub fn opened() -> Self {
        Self {
            text_visible: false,
            fog: Fog::Active,
        }
    }
}

/// Phase-scoped session data. Each phase carries only what it can have.
#[derive(Debug, Clone)]
pub(crate) enum Stage {
    Idle,
    Drawing {
        hand: Hand,
    },
    Revealed {
        hand: Hand,
    },
    AwaitingInterpretation {
        hand: Hand,
        overlay: Overlay,
    },
    Displaying {
        hand: Hand,
        overlay: Overlay,
        sections: Sections,
    },
}

impl Stage {
    pub(crate) fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Drawing { .. } => Phase::Drawing,
            Self::Revealed { .. } => Phase::Revealed,
            Self::AwaitingInterpretation { .. } => Phase::AwaitingInterpretation,
            Self::Displaying { .. } => Phase::Displaying,
        }
    }

    pub(crate) fn hand(&self) -> Option<&Hand> {
        match self {
            Self::Idle => None,
            Self::Drawing { hand }
            | Self::Revealed { hand }
            | Self::AwaitingInterpretation { hand, .. }
            | Self::Displaying { hand, .. } => Some(hand),
        }
    }

    pub(crate) fn overlay(&self) -> Option<Overlay> {
        match self {
            Self::AwaitingInterpretation { overlay, .. } | Self::Displaying { overlay, .. } => {
                Some(*overlay)
            }
            _ => None,
        }
    }
}

/// Something that became visible when a timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// All three cards turned face up.
    CardsRevealed,
    /// The interpretation text became visible.
    TextShown,
    /// The fog started fading.
    FogFading,
    /// The fog is gone.
    FogCleared,
}

/// A blocking, dismissable message for the user after rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// A draw was attempted without a question.
    EmptyQuestion,
    /// A reading was requested before drawing.
    NoHand,
    /// A reading was requested before the cards were face up.
    CardsNotRevealed,
    /// A reading was requested while one is outstanding.
    ReadingInProgress,
}

impl Notice {
    /// Localized notice text.
    pub fn message(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::EmptyQuestion, Language::En) => {
                "Please enter a question before drawing the cards."
            }
            (Self::EmptyQuestion, Language::Vi) => "Vui lòng nhập câu hỏi trước khi rút bài.",
            (Self::NoHand, Language::En) => "Please draw 3 cards first!",
            (Self::NoHand, Language::Vi) => "Vui lòng rút 3 lá bài trước!",
            (Self::CardsNotRevealed, Language::En) => "The cards are still being revealed.",
            (Self::CardsNotRevealed, Language::Vi) => "Các lá bài vẫn đang được lật.",
            (Self::ReadingInProgress, Language::En) => "Your reading is already on its way.",
            (Self::ReadingInProgress, Language::Vi) => "Kết quả giải bài đang được chuẩn bị.",
        }
    }
}
