//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] turns
//! the error into a message on stderr and an exit code.

use std::fmt;

use letterbox_engine::errors::GameError;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (history file, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),

    /// The players walked away (quit command or closed input)
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

// The boundary giving up is not a failure of the engine.
impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::InputClosed | GameError::Aborted => CliError::Interrupted(error.to_string()),
            other => CliError::Engine(other.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_input_and_quit_become_interruptions() {
        assert!(matches!(
            CliError::from(GameError::InputClosed),
            CliError::Interrupted(_)
        ));
        assert!(matches!(
            CliError::from(GameError::Aborted),
            CliError::Interrupted(_)
        ));
    }

    #[test]
    fn contract_violations_stay_engine_errors() {
        let e = CliError::from(GameError::EmptyDeck);
        assert!(matches!(e, CliError::Engine(_)));
        assert!(e.to_string().starts_with("Engine error:"));
    }
}
