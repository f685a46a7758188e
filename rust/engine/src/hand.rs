use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Cards a player may hold at once: one between turns, two right after drawing.
pub const HAND_CAPACITY: usize = 2;

/// Cards held by one player, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(HAND_CAPACITY),
        }
    }

    pub fn peek(&self, position: usize) -> Result<Card, GameError> {
        self.cards
            .get(position)
            .copied()
            .ok_or(GameError::PositionOutOfBounds {
                position,
                len: self.cards.len(),
            })
    }

    pub fn insert(&mut self, card: Card) -> Result<(), GameError> {
        if self.cards.len() >= HAND_CAPACITY {
            return Err(GameError::HandFull {
                capacity: HAND_CAPACITY,
            });
        }
        self.cards.push(card);
        Ok(())
    }

    pub fn remove_at(&mut self, position: usize) -> Result<Card, GameError> {
        if position >= self.cards.len() {
            return Err(GameError::PositionOutOfBounds {
                position,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(position))
    }

    /// Position of the first Prince or King in hand.
    pub fn royal_position(&self) -> Option<usize> {
        self.cards.iter().position(|c| c.is_royal())
    }

    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
