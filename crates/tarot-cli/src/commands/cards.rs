use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use tarot_core::Arcana;

pub fn run(arcana: Option<&str>, deck: Option<&Path>) -> Result<(), String> {
    let deck = super::load_deck(deck)?;

    let filter = match arcana.map(str::to_ascii_lowercase).as_deref() {
        None => None,
        Some("major") => Some(Arcana::Major),
        Some("minor") => Some(Arcana::Minor),
        Some(other) => return Err(format!("unknown arcana '{other}' (expected major or minor)")),
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Card", "Arcana", "Image"]);

    let mut count = 0;
    for card in deck
        .cards()
        .iter()
        .filter(|c| filter.is_none_or(|a| c.arcana == a))
    {
        let image = card.image_path().unwrap_or_else(|| "—".to_string());
        table.add_row(vec![card.name.clone(), card.arcana.to_string(), image]);
        count += 1;
    }

    println!("{table}");
    println!();
    println!("  {count} cards");

    Ok(())
}
