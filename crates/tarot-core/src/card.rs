//! Card records.

use serde::{Deserialize, Serialize};

/// Which half of the deck a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    /// The 22 trump cards, The Fool through The World.
    Major,
    /// The 56 suit cards.
    Minor,
}

impl std::fmt::Display for Arcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => write!(f, "Major"),
            Self::Minor => write!(f, "Minor"),
        }
    }
}

/// An immutable card record loaded from the deck dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card name, unique within a deck.
    pub name: String,
    /// Major or Minor Arcana.
    pub arcana: Arcana,
    /// Advisory meaning shown to the user.
    #[serde(default)]
    pub meaning: String,
}

/// Major Arcana in trump order; the index is the card number.
const MAJOR_ORDER: &[&str] = &[
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel Of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

/// Minor Arcana ranks in suit order; index + 1 is the rank number.
const MINOR_RANKS: &[&str] = &[
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Page",
    "Knight", "Queen", "King",
];

impl Card {
    /// Create a card record.
    pub fn new(name: impl Into<String>, arcana: Arcana, meaning: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arcana,
            meaning: meaning.into(),
        }
    }

    /// Path of the card artwork, e.g. `/cards/00-TheFool.jpg` or `/cards/Cups01.jpg`.
    ///
    /// Returns `None` when the name is not a recognized card of its arcana.
    pub fn image_path(&self) -> Option<String> {
        match self.arcana {
            Arcana::Major => {
                let number = MAJOR_ORDER.iter().position(|n| *n == self.name)?;
                let compact: String = self.name.split_whitespace().collect();
                Some(format!("/cards/{number:02}-{compact}.jpg"))
            }
            Arcana::Minor => {
                let (rank, suit) = self.name.split_once(" of ")?;
                let number = MINOR_RANKS.iter().position(|r| *r == rank)? + 1;
                Some(format!("/cards/{suit}{number:02}.jpg"))
            }
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
