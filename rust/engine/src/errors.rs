use thiserror::Error;

/// Contract violations and boundary shutdowns. Reaching one of the invariant
/// variants means the orchestration is broken, not that a player typed
/// something wrong.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot draw from an empty deck")]
    EmptyDeck,
    #[error("Player {player} has no card in hand")]
    EmptyHand { player: String },
    #[error("Hand already holds {capacity} cards")]
    HandFull { capacity: usize },
    #[error("Hand position {position} out of bounds (hand size {len})")]
    PositionOutOfBounds { position: usize, len: usize },
    #[error("No player with id {0}")]
    UnknownPlayer(usize),
    #[error("No players registered")]
    NoPlayers,
    #[error("Input stream closed")]
    InputClosed,
    #[error("Game abandoned by player")]
    Aborted,
}

/// Recoverable input problems. The boundary shows the message and asks again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("This player is not in the game")]
    UnknownPlayer,
    #[error("You cannot target yourself")]
    SelfTarget,
    #[error("This player is protected by a handmaiden")]
    Protected,
    #[error("This player is out of cards")]
    NoCards,
    #[error("Player is already in the game")]
    DuplicateName,
    #[error("Please enter a valid card position (0 to {max})")]
    InvalidPosition { max: usize },
    #[error("Invalid card name")]
    UnknownCard,
    #[error("You cannot guess a guard")]
    GuardGuess,
}
