use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Cards a player has put down this round, oldest first. Public to everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedPile {
    cards: Vec<Card>,
}

impl UsedPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Sum of strengths, the tie-break metric when the deck runs out.
    pub fn total_value(&self) -> u32 {
        self.cards.iter().map(|c| u32::from(c.strength())).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
