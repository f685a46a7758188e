//! Scripted boundary for driving the engine without a terminal.

#![allow(dead_code)]

use std::collections::VecDeque;

use letterbox_engine::errors::{GameError, InputError};
use letterbox_engine::events::GameEvent;
use letterbox_engine::io::GameIo;
use letterbox_engine::player::Player;

/// Answers prompts from queues and records everything the engine says.
/// An exhausted queue behaves like a closed input stream unless a default
/// card choice is set.
#[derive(Debug, Default)]
pub struct ScriptedIo {
    pub names: VecDeque<String>,
    pub choices: VecDeque<usize>,
    pub opponents: VecDeque<String>,
    pub guesses: VecDeque<String>,
    pub default_choice: Option<usize>,
    pub events: Vec<GameEvent>,
    pub rejections: Vec<InputError>,
    pub card_prompts: usize,
}

impl ScriptedIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(mut self, names: &[&str]) -> Self {
        self.names = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn choices(mut self, choices: &[usize]) -> Self {
        self.choices = choices.iter().copied().collect();
        self
    }

    pub fn opponents(mut self, names: &[&str]) -> Self {
        self.opponents = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn guesses(mut self, guesses: &[&str]) -> Self {
        self.guesses = guesses.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn always_choose(mut self, position: usize) -> Self {
        self.default_choice = Some(position);
        self
    }

    pub fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl GameIo for ScriptedIo {
    fn request_player_name(&mut self) -> Result<String, GameError> {
        self.names.pop_front().ok_or(GameError::InputClosed)
    }

    fn request_card_choice(&mut self, _player: &Player) -> Result<usize, GameError> {
        self.card_prompts += 1;
        self.choices
            .pop_front()
            .or(self.default_choice)
            .ok_or(GameError::InputClosed)
    }

    fn request_opponent_name(&mut self, _player: &Player) -> Result<String, GameError> {
        self.opponents.pop_front().ok_or(GameError::InputClosed)
    }

    fn request_guard_guess(&mut self, _player: &Player) -> Result<String, GameError> {
        self.guesses.pop_front().ok_or(GameError::InputClosed)
    }

    fn reject(&mut self, error: &InputError) {
        self.rejections.push(error.clone());
    }

    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
