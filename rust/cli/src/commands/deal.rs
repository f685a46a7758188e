//! Deal command: shuffle one deck and print it top to bottom.
//!
//! Useful for checking what a seed will produce before playing with it.

use crate::error::CliError;
use crate::formatters::format_card;
use letterbox_engine::deck::Deck;
use std::io::Write;

/// Handle the deal command.
///
/// Prints the seed, then one numbered line per card in the order the cards
/// would be drawn. Without a seed a random one is chosen and shown.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.build();
    deck.shuffle();

    writeln!(out, "Seed: {}", seed)?;
    for (i, card) in deck.draw_order().enumerate() {
        writeln!(out, "{:>2}. {}", i + 1, format_card(card))?;
    }
    Ok(())
}
