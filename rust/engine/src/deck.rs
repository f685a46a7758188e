use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::fmt;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Orders a freshly built deck. The last element of the slice is the top card.
pub trait Shuffler: fmt::Debug {
    fn shuffle(&mut self, cards: &mut Vec<Card>);
}

/// Uniform shuffle driven by a seeded ChaCha20 stream.
#[derive(Debug, Clone)]
pub struct SeededShuffler {
    rng: ChaCha20Rng,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&mut self, cards: &mut Vec<Card>) {
        cards.shuffle(&mut self.rng);
    }
}

/// Puts a fixed sequence of cards on top of every deck it shuffles, in draw
/// order. Cards the deck does not contain (or no longer has spare copies of)
/// are skipped, so the composition never changes.
#[derive(Debug, Clone, Default)]
pub struct StackedShuffler {
    top: Vec<Card>,
}

impl StackedShuffler {
    pub fn new(top: Vec<Card>) -> Self {
        Self { top }
    }
}

impl Shuffler for StackedShuffler {
    fn shuffle(&mut self, cards: &mut Vec<Card>) {
        let mut stacked = Vec::with_capacity(self.top.len());
        for want in &self.top {
            if let Some(i) = cards.iter().position(|c| c == want) {
                stacked.push(cards.remove(i));
            }
        }
        // first requested card must end up last (the top)
        cards.extend(stacked.into_iter().rev());
    }
}

/// Draw pile for one round. Rebuilt with the full composition every round.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    shuffler: Box<dyn Shuffler>,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_shuffler(SeededShuffler::new(seed))
    }

    pub fn with_shuffler(shuffler: impl Shuffler + 'static) -> Self {
        // Empty until build is called explicitly
        Self {
            cards: Vec::new(),
            shuffler: Box::new(shuffler),
        }
    }

    /// Replaces the contents with the fixed 16-card composition.
    pub fn build(&mut self) {
        self.cards = full_deck();
    }

    pub fn shuffle(&mut self) {
        self.shuffler.shuffle(&mut self.cards);
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Remaining cards, next draw first.
    pub fn draw_order(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().rev().copied()
    }
}
