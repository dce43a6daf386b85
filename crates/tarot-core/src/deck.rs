//! The card deck.

use std::collections::HashSet;
use std::path::Path;

use rand::Rng;

use crate::card::{Arcana, Card};
use crate::data;
use crate::error::{TarotError, TarotResult};
use crate::hand::{HAND_SIZE, Hand};
use crate::sample::sample_without_replacement;

/// An immutable, ordered collection of cards with unique names.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck, rejecting duplicate card names.
    pub fn new(cards: Vec<Card>) -> TarotResult<Self> {
        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.name.as_str()) {
                return Err(TarotError::InvalidArgument(format!(
                    "duplicate card in deck: {}",
                    card.name
                )));
            }
        }
        Ok(Self { cards })
    }

    /// The embedded 78-card deck.
    pub fn standard() -> TarotResult<Self> {
        Self::from_json(data::CARDS_JSON)
    }

    /// Parse a deck from a JSON array of card records.
    pub fn from_json(json: &str) -> TarotResult<Self> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    /// Load a deck from a JSON file.
    pub fn from_path(path: &Path) -> TarotResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in dataset order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Find a card by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Cards of one arcana, in dataset order.
    pub fn by_arcana(&self, arcana: Arcana) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.arcana == arcana)
    }

    /// Draw `k` distinct cards uniformly at random.
    pub fn draw<R: Rng + ?Sized>(&self, k: usize, rng: &mut R) -> TarotResult<Vec<Card>> {
        sample_without_replacement(&self.cards, k, rng)
    }

    /// Draw a face-down three-card hand.
    pub fn draw_hand<R: Rng + ?Sized>(&self, rng: &mut R) -> TarotResult<Hand> {
        let cards = self.draw(HAND_SIZE, rng)?;
        tracing::debug!(
            past = %cards[0],
            present = %cards[1],
            future = %cards[2],
            "drew hand"
        );
        Hand::new(cards)
    }
}
