//! [`GameIo`] over a line-oriented reader and writer.
//!
//! Every player shares the same input stream. Typing `q` or `quit` at any
//! prompt abandons the game; end of input does the same.

use std::io::{BufRead, Write};

use letterbox_engine::errors::{GameError, InputError};
use letterbox_engine::events::GameEvent;
use letterbox_engine::io::GameIo;
use letterbox_engine::player::Player;

use crate::formatters::format_event;
use crate::io_utils::read_stdin_line;
use crate::validation::{ParseResult, is_quit, parse_card_position};

pub struct TerminalIo<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    show_piles: bool,
}

impl<'a> TerminalIo<'a> {
    pub fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self {
            input,
            out,
            show_piles: true,
        }
    }

    /// Whether used piles are printed before each turn.
    pub fn show_piles(mut self, show: bool) -> Self {
        self.show_piles = show;
        self
    }

    fn say(&mut self, text: &str) {
        // a closed stdout is noticed on the next prompt's read
        let _ = writeln!(self.out, "{}", text);
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String, GameError> {
        let _ = write!(self.out, "{}", prompt);
        let _ = self.out.flush();
        read_stdin_line(self.input).ok_or(GameError::InputClosed)
    }

    fn ask(&mut self, prompt: &str) -> Result<String, GameError> {
        let line = self.read_answer(prompt)?;
        if is_quit(&line) {
            return Err(GameError::Aborted);
        }
        Ok(line)
    }
}

impl GameIo for TerminalIo<'_> {
    fn request_player_name(&mut self) -> Result<String, GameError> {
        self.ask("Player name (blank to start): ")
    }

    fn request_card_choice(&mut self, player: &Player) -> Result<usize, GameError> {
        let max = player.hand().len().saturating_sub(1);
        loop {
            let line =
                self.read_answer(&format!("{}, play which card? (0-{}): ", player.name(), max))?;
            match parse_card_position(&line) {
                ParseResult::Position(pos) => return Ok(pos),
                ParseResult::Quit => return Err(GameError::Aborted),
                ParseResult::Invalid => self.say(&InputError::InvalidPosition { max }.to_string()),
            }
        }
    }

    fn request_opponent_name(&mut self, player: &Player) -> Result<String, GameError> {
        self.ask(&format!("{}, choose an opponent: ", player.name()))
    }

    fn request_guard_guess(&mut self, player: &Player) -> Result<String, GameError> {
        self.ask(&format!(
            "{}, name a card (Priest, Baron, Handmaiden, Prince, King, Countess, Princess): ",
            player.name()
        ))
    }

    fn reject(&mut self, error: &InputError) {
        self.say(&error.to_string());
    }

    fn notify(&mut self, event: &GameEvent) {
        if !self.show_piles && matches!(event, GameEvent::UsedPiles { .. }) {
            return;
        }
        if let Some(text) = format_event(event) {
            self.say(&text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterbox_engine::cards::Card;
    use letterbox_engine::player::PlayerId;
    use std::io::Cursor;

    fn holder() -> Player {
        let mut p = Player::new(PlayerId(0), "Alice");
        p.take_card(Card::Guard).unwrap();
        p.take_card(Card::Baron).unwrap();
        p
    }

    #[test]
    fn non_numeric_choice_is_asked_again() {
        let mut input = Cursor::new("two\n1\n");
        let mut out = Vec::new();
        let pos = {
            let mut io = TerminalIo::new(&mut input, &mut out);
            io.request_card_choice(&holder()).unwrap()
        };
        assert_eq!(pos, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Please enter a valid card position (0 to 1)"));
    }

    #[test]
    fn quit_and_eof_end_the_game() {
        let mut input = Cursor::new("quit\n");
        let mut out = Vec::new();
        let mut io = TerminalIo::new(&mut input, &mut out);
        assert_eq!(io.request_opponent_name(&holder()), Err(GameError::Aborted));
        assert_eq!(io.request_guard_guess(&holder()), Err(GameError::InputClosed));
    }

    #[test]
    fn hidden_piles_are_not_printed() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        {
            let mut io = TerminalIo::new(&mut input, &mut out).show_piles(false);
            io.notify(&GameEvent::UsedPiles { piles: vec![] });
            io.notify(&GameEvent::RoundStarted { round: 1 });
        }
        assert_eq!(String::from_utf8(out).unwrap(), "=== Round 1 ===\n");
    }
}
