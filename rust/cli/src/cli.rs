//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "letterbox",
    version,
    about = "A turn-based deduction card game for players sharing one terminal"
)]
pub struct LetterboxCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one game on this terminal
    Play {
        /// Deck seed, for a reproducible game
        #[arg(long)]
        seed: Option<u64>,
        /// Write a JSONL record of every finished round to this file
        #[arg(long)]
        history: Option<String>,
        /// Do not print used piles before each turn
        #[arg(long)]
        hide_piles: bool,
    },
    /// Shuffle one deck and print its draw order
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
