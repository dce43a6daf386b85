//! The three-card hand.
//!
//! Card order is meaningful: position 0 is the Past, 1 the Present, 2 the
//! Future. The hand is revealed as a single batch, so the revealed flag lives
//! on the hand rather than on each card.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::{TarotError, TarotResult};
use crate::language::Language;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 3;

/// Position of a card within the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// What led here.
    Past,
    /// The current situation.
    Present,
    /// Where things are heading.
    Future,
}

impl Position {
    /// All positions in hand order.
    pub const ALL: [Position; HAND_SIZE] = [Position::Past, Position::Present, Position::Future];

    /// Index of this position in the hand.
    pub fn index(self) -> usize {
        match self {
            Self::Past => 0,
            Self::Present => 1,
            Self::Future => 2,
        }
    }

    /// Localized label for this position.
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Past, Language::En) => "Past",
            (Self::Present, Language::En) => "Present",
            (Self::Future, Language::En) => "Future",
            (Self::Past, Language::Vi) => "Quá khứ",
            (Self::Present, Language::Vi) => "Hiện tại",
            (Self::Future, Language::Vi) => "Tương lai",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(Language::En))
    }
}

/// Three distinct cards in Past/Present/Future order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    revealed: bool,
}

impl Hand {
    /// Build a face-down hand from exactly three distinct cards.
    pub fn new(cards: Vec<Card>) -> TarotResult<Self> {
        let count = cards.len();
        let cards: [Card; HAND_SIZE] = cards.try_into().map_err(|_| {
            TarotError::InvalidArgument(format!("a hand needs {HAND_SIZE} cards, got {count}"))
        })?;

        for (i, card) in cards.iter().enumerate() {
            if cards[..i].iter().any(|c| c.name == card.name) {
                return Err(TarotError::InvalidArgument(format!(
                    "duplicate card in hand: {}",
                    card.name
                )));
            }
        }

        Ok(Self {
            cards,
            revealed: false,
        })
    }

    /// The cards in hand order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card at a position.
    pub fn card(&self, position: Position) -> &Card {
        &self.cards[position.index()]
    }

    /// Iterate over `(position, card)` pairs in hand order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Card)> {
        Position::ALL.into_iter().zip(self.cards.iter())
    }

    /// Whether the cards are face up.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the card at a position is face up. Always equal for all three.
    pub fn is_card_revealed(&self, _position: Position) -> bool {
        self.revealed
    }

    /// Turn all three cards face up at once.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }
}
