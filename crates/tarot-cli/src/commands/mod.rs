pub mod cards;
pub mod draw;
pub mod questions;
pub mod read;

use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use tarot_core::{Deck, Hand, Language, Sections};
use tarot_oracle::FALLBACK_READING;

/// Load the built-in deck or one from a JSON file.
fn load_deck(path: Option<&Path>) -> Result<Deck, String> {
    match path {
        Some(path) => {
            Deck::from_path(path).map_err(|e| format!("failed to load {}: {e}", path.display()))
        }
        None => Deck::standard().map_err(|e| e.to_string()),
    }
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::parse(code).ok_or_else(|| format!("unknown language '{code}' (expected en or vi)"))
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Table of a hand; face-down cards show as `?`.
fn hand_table(hand: &Hand, language: Language) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Position", "Card", "Arcana", "Meaning"]);

    for (position, card) in hand.iter() {
        let row = if hand.is_card_revealed(position) {
            let meaning = if card.meaning.is_empty() {
                "—".to_string()
            } else {
                card.meaning.clone()
            };
            vec![
                position.label(language).to_string(),
                card.name.clone(),
                card.arcana.to_string(),
                meaning,
            ]
        } else {
            vec![
                position.label(language).to_string(),
                "?".to_string(),
                String::new(),
                String::new(),
            ]
        };
        table.add_row(row);
    }
    table
}

/// Reading text under its localized section titles.
///
/// All four titles are shown, blank where the reading has no such section.
/// The fallback reading is shown as-is.
fn render_sections(sections: &Sections, language: Language) -> String {
    if sections.as_slice() == [FALLBACK_READING] {
        return format!("  {FALLBACK_READING}\n\n");
    }
    sections
        .labeled()
        .map(|(label, text)| format!("  {}\n  {text}\n\n", label.title(language).bold()))
        .collect()
}
