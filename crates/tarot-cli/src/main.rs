//! Command-line tarot readings: ask a question, draw Past/Present/Future, get
//! an interpretation.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tarot",
    about = "Three-card tarot readings with an AI interpretation",
    version,
    propagate_version = true
)]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a reading session
    Read {
        /// Reading language: en or vi
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Deck JSON file (default: the built-in 78-card deck)
        #[arg(short, long)]
        deck: Option<PathBuf>,

        /// Model name (overrides OPENAI_MODEL_NAME)
        #[arg(short, long)]
        model: Option<String>,

        /// Ask this question once and exit instead of prompting
        #[arg(long)]
        question: Option<String>,
    },

    /// Draw three cards without requesting an interpretation
    Draw {
        /// Label language: en or vi
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Deck JSON file
        #[arg(short, long)]
        deck: Option<PathBuf>,
    },

    /// List the cards in a deck
    Cards {
        /// Filter by arcana: major or minor
        #[arg(short, long)]
        arcana: Option<String>,

        /// Deck JSON file
        #[arg(short, long)]
        deck: Option<PathBuf>,
    },

    /// Show suggested questions
    Questions {
        /// Language: en or vi
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Show every question instead of a random selection
        #[arg(long)]
        all: bool,

        /// RNG seed for the selection
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init(
        logging::Verbosity::from_flags(cli.verbose, cli.quiet),
        cli.no_color,
    );

    let result = match cli.command {
        Commands::Read {
            lang,
            seed,
            deck,
            model,
            question,
        } => commands::read::run(&commands::read::ReadArgs {
            lang,
            seed,
            deck,
            model,
            question,
        }),
        Commands::Draw { lang, seed, deck } => commands::draw::run(&lang, seed, deck.as_deref()),
        Commands::Cards { arcana, deck } => commands::cards::run(arcana.as_deref(), deck.as_deref()),
        Commands::Questions { lang, all, seed } => commands::questions::run(&lang, all, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
