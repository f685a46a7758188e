//! # Play Command
//!
//! Runs one full game on a shared terminal: roster entry, then rounds until
//! someone holds five blocks.
//!
//! ## Features
//!
//! - Every answer is validated by the engine and re-prompted with a reason
//! - Graceful quit handling (any prompt accepts 'q' or 'quit'; EOF also ends the game)
//! - Optional used-pile display before each turn
//! - Optional JSONL history of finished rounds

use crate::config::Config;
use crate::error::CliError;
use crate::terminal::TerminalIo;
use crate::ui;
use letterbox_engine::engine::Engine;
use letterbox_engine::io::GameIo;
use letterbox_engine::logger::RoundLogger;
use std::io::{BufRead, Write};
use tracing::info;

/// Settings for one game after merging configuration and flags.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub history: Option<String>,
    pub show_piles: bool,
}

impl PlayOptions {
    /// Command-line flags win over configured values.
    pub fn resolve(
        config: &Config,
        seed: Option<u64>,
        history: Option<String>,
        hide_piles: bool,
    ) -> Self {
        Self {
            seed: seed.or(config.seed),
            history: history.or_else(|| config.history.clone()),
            show_piles: config.show_piles && !hide_piles,
        }
    }
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self::resolve(&Config::default(), None, None, false)
    }
}

/// Handle the play command: one interactive game.
///
/// # Returns
///
/// * `Ok(())` when the game finishes or the players abandon it
/// * `Err(CliError)` if nobody registers, the history file cannot be written,
///   or the engine reports a broken invariant
///
/// # Examples
///
/// ```
/// use letterbox_cli::commands::{PlayOptions, handle_play_command};
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("q\n");
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// handle_play_command(&PlayOptions::default(), &mut input, &mut out, &mut err).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Game abandoned."));
/// ```
pub fn handle_play_command(
    options: &PlayOptions,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = options.seed.unwrap_or_else(rand::random);
    writeln!(out, "letterbox: seed={}", seed)?;

    let mut logger = match &options.history {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    let mut eng = Engine::new(Some(seed));
    let outcome = {
        let mut io = TerminalIo::new(stdin, out).show_piles(options.show_piles);
        play_game(&mut eng, &mut io, logger.as_mut(), seed, err)
    };

    match outcome {
        Err(CliError::Interrupted(reason)) => {
            info!(%reason, round = eng.round(), "game abandoned");
            writeln!(out, "Game abandoned.")?;
            Ok(())
        }
        other => other,
    }
}

fn play_game(
    eng: &mut Engine,
    io: &mut dyn GameIo,
    mut logger: Option<&mut RoundLogger>,
    seed: u64,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match eng.setup_players(io)? {
        0 => return Err(CliError::InvalidInput("no players registered".into())),
        1 => ui::display_warning(err, "only one player registered; every round is won on the deal")?,
        _ => {}
    }
    eng.check_roster(io)?;

    while eng.announce_game_winner(io)?.is_none() {
        let summary = eng.play_round(io)?;
        if let Some(log) = logger.as_deref_mut() {
            log.log_round(Some(seed), &summary)?;
        }
    }
    Ok(())
}
