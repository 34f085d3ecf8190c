//! CLI deck example.
//!
//! Prints a fresh deck, shuffles it, deals hands and prints the sorted deck:
//!
//! ```text
//! cargo run --example deck_cli -- --seed 42 --sets 2 --cards 5
//! ```

use std::process::ExitCode;

use clap::Parser;
use deckrs::{CardStyle, Deck, HandsDisplay, PrintOptions};
use log::error;

#[derive(Debug, Parser)]
struct Cli {
    /// Shuffle seed.
    #[clap(long, short, default_value_t = 42, allow_negative_numbers = true)]
    seed: i64,
    /// Number of hands to deal.
    #[clap(long, default_value_t = 2)]
    sets: usize,
    /// Number of cards per hand.
    #[clap(long, short, default_value_t = 5)]
    cards: usize,
    /// Print card names instead of short codes.
    #[clap(long, short)]
    names: bool,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let style = if cli.names {
        CardStyle::Name
    } else {
        CardStyle::Code
    };
    let options = PrintOptions::default().with_style(style);

    let mut deck = Deck::new();
    println!("New deck:");
    println!("{}", deck.display(options));

    deck.shuffle(cli.seed);
    println!("Shuffled with seed {}:", cli.seed);
    println!("{}", deck.display(options));

    match deck.deal(cli.sets, cli.cards) {
        Ok(hands) => {
            println!("Dealt {} x {}:", cli.sets, cli.cards);
            println!("{}", HandsDisplay::new(&hands, options));
        }
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    }

    deck.sort();
    println!("Sorted:");
    print!("{}", deck.display(options));

    ExitCode::SUCCESS
}
