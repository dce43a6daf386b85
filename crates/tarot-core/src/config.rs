//! Configuration for a reading session.

use std::time::Duration;

use crate::data::SUGGESTION_COUNT;
use crate::language::Language;

/// Delays that pace the reveal and the display of a reading.
///
/// The display timers are measured from the moment the interpretation
/// arrives, not from each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// From submitting a question to turning the cards face up.
    pub reveal_delay: Duration,
    /// From receiving the interpretation to showing its text.
    pub text_reveal: Duration,
    /// From receiving the interpretation to the fog starting to fade.
    pub fog_fade: Duration,
    /// From receiving the interpretation to the fog being gone.
    pub fog_clear: Duration,
    /// Length of the card flip animation, for renderers.
    pub card_flip: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(500),
            text_reveal: Duration::from_millis(1500),
            fog_fade: Duration::from_millis(1500),
            fog_clear: Duration::from_millis(2500),
            card_flip: Duration::from_millis(4000),
        }
    }
}

impl TimingConfig {
    /// All delays zero; timers fire on the next tick.
    pub fn immediate() -> Self {
        Self {
            reveal_delay: Duration::ZERO,
            text_reveal: Duration::ZERO,
            fog_fade: Duration::ZERO,
            fog_clear: Duration::ZERO,
            card_flip: Duration::ZERO,
        }
    }
}

/// Configuration for a reading session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible draws; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Initial reading language.
    pub language: Language,
    /// Number of question suggestions offered.
    pub suggestion_count: usize,
    /// Reveal and display pacing.
    pub timing: TimingConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            language: Language::En,
            suggestion_count: SUGGESTION_COUNT,
            timing: TimingConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initial language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the number of question suggestions.
    pub fn with_suggestion_count(mut self, count: usize) -> Self {
        self.suggestion_count = count;
        self
    }

    /// Set the reveal and display pacing.
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }
}
