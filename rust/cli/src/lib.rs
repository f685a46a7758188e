//! # Letterbox CLI Library
//!
//! Command-line front end for the letterbox deduction card game. Players
//! share one terminal; the engine asks for names, card choices, opponents,
//! and Guard guesses over stdin and prints what happens on stdout.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game until someone wins five rounds
//! - `deal`: Shuffle a deck and show its draw order
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod terminal;
pub mod ui;
pub mod validation;

use cli::{Commands, LetterboxCli};
use commands::{PlayOptions, handle_cfg_command, handle_deal_command, handle_play_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// `play` reads the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["letterbox", "deal", "--seed", "42"];
/// let code = letterbox_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match LetterboxCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: letterbox <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: letterbox --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Play {
            seed,
            history,
            hide_piles,
        } => {
            let resolved = match config::load_with_sources() {
                Ok(r) => r,
                Err(e) => {
                    let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
                    return exit_code::ERROR;
                }
            };
            let options = PlayOptions::resolve(&resolved.config, seed, history, hide_piles);
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(&options, &mut stdin_lock, out, err)
        }
    };
    exit_code_for(result, err)
}

fn exit_code_for(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = writeln!(err, "Interrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        // cfg reports its own configuration errors
        Err(CliError::Config(_)) => exit_code::ERROR,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subcommand_parses() {
        for args in [
            vec!["letterbox", "cfg"],
            vec!["letterbox", "deal"],
            vec!["letterbox", "deal", "--seed", "9"],
            vec!["letterbox", "play"],
            vec![
                "letterbox",
                "play",
                "--seed",
                "1",
                "--history",
                "h.jsonl",
                "--hide-piles",
            ],
        ] {
            assert!(LetterboxCli::try_parse_from(&args).is_ok(), "{:?}", args);
        }
    }

    #[test]
    fn play_flags_reach_the_command() {
        let cli = LetterboxCli::try_parse_from(["letterbox", "play", "--seed", "5", "--hide-piles"])
            .unwrap();
        match cli.cmd {
            Commands::Play {
                seed,
                history,
                hide_piles,
            } => {
                assert_eq!(seed, Some(5));
                assert_eq!(history, None);
                assert!(hide_piles);
            }
            other => panic!("expected play, got {:?}", other),
        }
    }

    #[test]
    fn engine_errors_map_to_exit_code_two() {
        let mut err = Vec::new();
        let code = exit_code_for(Err(CliError::Engine("boom".into())), &mut err);
        assert_eq!(code, exit_code::ERROR);
        assert_eq!(String::from_utf8(err).unwrap(), "Error: Engine error: boom\n");
    }

    #[test]
    fn interruptions_map_to_130() {
        let mut err = Vec::new();
        let code = exit_code_for(Err(CliError::Interrupted("input closed".into())), &mut err);
        assert_eq!(code, exit_code::INTERRUPTED);
    }
}
