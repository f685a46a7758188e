use std::collections::VecDeque;

use crate::deck::Deck;
use crate::errors::{GameError, InputError};
use crate::player::{Player, PlayerId, BLOCKS_TO_WIN};

/// The fixed roster of a game plus its round-robin turn order.
///
/// Players live in insertion order and are addressed by [`PlayerId`]; the
/// rotation is a queue of ids where taking a turn moves the front id to the
/// back. Relative order never changes.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    rotation: VecDeque<PlayerId>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player at the back of the rotation.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, InputError> {
        let name = name.trim();
        if self.find(name).is_some() {
            return Err(InputError::DuplicateName);
        }
        let id = PlayerId(self.players.len());
        self.players.push(Player::new(id, name));
        self.rotation.push_back(id);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players.get(id.0).ok_or(GameError::UnknownPlayer(id.0))
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        self.players
            .get_mut(id.0)
            .ok_or(GameError::UnknownPlayer(id.0))
    }

    /// Two distinct players borrowed mutably at once.
    pub fn pair_mut(
        &mut self,
        a: PlayerId,
        b: PlayerId,
    ) -> Result<(&mut Player, &mut Player), GameError> {
        let len = self.players.len();
        if a.0 >= len {
            return Err(GameError::UnknownPlayer(a.0));
        }
        if b.0 >= len || a == b {
            return Err(GameError::UnknownPlayer(b.0));
        }
        if a.0 < b.0 {
            let (lo, hi) = self.players.split_at_mut(b.0);
            Ok((&mut lo[a.0], &mut hi[0]))
        } else {
            let (lo, hi) = self.players.split_at_mut(a.0);
            Ok((&mut hi[0], &mut lo[b.0]))
        }
    }

    /// Case-insensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<PlayerId> {
        self.players.iter().find(|p| p.is_named(name)).map(|p| p.id())
    }

    /// Players in current rotation order, next to act first.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.rotation.iter().map(move |id| &self.players[id.0])
    }

    /// Takes the front of the rotation, re-queues it at the back and returns it.
    pub fn current_player(&mut self) -> Result<PlayerId, GameError> {
        let id = self.rotation.pop_front().ok_or(GameError::NoPlayers)?;
        self.rotation.push_back(id);
        Ok(id)
    }

    pub fn holders(&self) -> usize {
        self.players.iter().filter(|p| p.has_cards()).count()
    }

    pub fn round_has_winner(&self) -> bool {
        self.holders() == 1
    }

    /// The sole player still holding a card, if there is exactly one.
    pub fn round_winner(&self) -> Option<PlayerId> {
        if !self.round_has_winner() {
            return None;
        }
        self.iter().find(|p| p.has_cards()).map(|p| p.id())
    }

    pub fn game_winner(&self) -> Option<PlayerId> {
        self.iter()
            .find(|p| p.block_count() >= BLOCKS_TO_WIN)
            .map(|p| p.id())
    }

    /// Strictly greatest used-pile total; the first in rotation order wins ties.
    pub fn highest_used_pile_owner(&self) -> Option<PlayerId> {
        let mut best: Option<&Player> = None;
        for p in self.iter() {
            match best {
                Some(b) if p.used().total_value() <= b.used().total_value() => {}
                _ => best = Some(p),
            }
        }
        best.map(|p| p.id())
    }

    pub fn reset_for_new_round(&mut self) {
        for p in &mut self.players {
            p.reset_round();
        }
    }

    /// One card to every player, in rotation order.
    pub fn deal(&mut self, deck: &mut Deck) -> Result<(), GameError> {
        for id in self.rotation.iter() {
            let card = deck.draw()?;
            self.players[id.0].take_card(card)?;
        }
        Ok(())
    }
}
