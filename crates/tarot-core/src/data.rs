//! Embedded datasets.
//!
//! The standard deck and the question suggestion lists ship inside the crate
//! as JSON and are parsed once at load.

use rand::Rng;

use crate::error::TarotResult;
use crate::language::Language;
use crate::sample::sample_without_replacement;

/// The standard 78-card deck.
pub const CARDS_JSON: &str = include_str!("../data/cards.json");

/// English question suggestions.
pub const QUESTIONS_EN_JSON: &str = include_str!("../data/questions_en.json");

/// Vietnamese question suggestions.
pub const QUESTIONS_VI_JSON: &str = include_str!("../data/questions_vi.json");

/// Number of suggestions offered at a time.
pub const SUGGESTION_COUNT: usize = 5;

/// Question suggestion lists, one per language.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    en: Vec<String>,
    vi: Vec<String>,
}

impl QuestionBank {
    /// Build a bank from explicit lists.
    pub fn new(en: Vec<String>, vi: Vec<String>) -> Self {
        Self { en, vi }
    }

    /// The embedded suggestion lists.
    pub fn standard() -> TarotResult<Self> {
        Ok(Self {
            en: serde_json::from_str(QUESTIONS_EN_JSON)?,
            vi: serde_json::from_str(QUESTIONS_VI_JSON)?,
        })
    }

    /// All questions for a language.
    pub fn questions(&self, language: Language) -> &[String] {
        match language {
            Language::En => &self.en,
            Language::Vi => &self.vi,
        }
    }

    /// Pick up to `count` distinct suggestions at random.
    pub fn suggest<R: Rng + ?Sized>(
        &self,
        language: Language,
        count: usize,
        rng: &mut R,
    ) -> Vec<String> {
        let pool = self.questions(language);
        // count is clamped to the pool, so sampling cannot fail
        sample_without_replacement(pool, count.min(pool.len()), rng).unwrap_or_default()
    }
}
