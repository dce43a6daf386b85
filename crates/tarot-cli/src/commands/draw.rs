use std::path::Path;

use colored::Colorize;

pub fn run(lang: &str, seed: Option<u64>, deck: Option<&Path>) -> Result<(), String> {
    let language = super::parse_language(lang)?;
    let deck = super::load_deck(deck)?;
    let mut rng = super::rng(seed);

    let mut hand = deck.draw_hand(&mut rng).map_err(|e| e.to_string())?;
    hand.reveal();

    println!("  {}", "Your cards".bold());
    println!("{}", super::hand_table(&hand, language));

    Ok(())
}
