//! The contract between the engine and whatever channel the players use.
//!
//! Requests block until the channel produces an answer. The engine validates
//! every answer and calls [`GameIo::reject`] before asking again, so an
//! implementation only has to move text back and forth. Returning
//! [`GameError::InputClosed`] or [`GameError::Aborted`] from a request ends
//! the game.

use crate::errors::{GameError, InputError};
use crate::events::GameEvent;
use crate::player::Player;

pub trait GameIo {
    /// Next name for the roster. An empty string ends roster entry.
    fn request_player_name(&mut self) -> Result<String, GameError>;

    /// Position (0 or 1) of the card `player` wants to play.
    fn request_card_choice(&mut self, player: &Player) -> Result<usize, GameError>;

    /// Name of the opponent `player` wants to target.
    fn request_opponent_name(&mut self, player: &Player) -> Result<String, GameError>;

    /// Card name `player` guesses with a Guard.
    fn request_guard_guess(&mut self, player: &Player) -> Result<String, GameError>;

    /// The last answer was invalid; explain why.
    fn reject(&mut self, error: &InputError);

    /// Fire-and-forget status update.
    fn notify(&mut self, event: &GameEvent);
}
