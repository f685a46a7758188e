use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::pile::UsedPile;
use serde::{Deserialize, Serialize};

/// Round wins needed to take the game.
pub const BLOCKS_TO_WIN: u32 = 5;

/// Stable handle for a registered player. Rotation order changes, ids do not.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

/// A seat at the table: per-round cards and protection, plus the block tally
/// that carries across the whole game.
#[derive(Debug, Clone)]
pub struct Player {
    /// Registry handle
    id: PlayerId,
    /// Display name, unique case-insensitively within a game
    name: String,
    /// Held cards (0 once knocked out of the round)
    hand: Hand,
    /// Publicly played cards this round
    used: UsedPile,
    /// Handmaiden shield, cleared at the start of the player's own next turn
    protected: bool,
    /// Rounds won so far; never decreases
    blocks: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
            used: UsedPile::new(),
            protected: false,
            blocks: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
    pub fn used(&self) -> &UsedPile {
        &self.used
    }
    pub fn is_protected(&self) -> bool {
        self.protected
    }
    pub fn block_count(&self) -> u32 {
        self.blocks
    }

    pub fn has_cards(&self) -> bool {
        self.hand.has_cards()
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    pub fn take_card(&mut self, card: Card) -> Result<(), GameError> {
        self.hand.insert(card)
    }

    /// Moves the card at `position` from hand to the used pile and returns it.
    pub fn play(&mut self, position: usize) -> Result<Card, GameError> {
        let card = self.hand.remove_at(position)?;
        self.used.push(card);
        Ok(card)
    }

    /// Discards the held card to the used pile. Used both for being knocked
    /// out and for a Prince discard.
    pub fn eliminate(&mut self) -> Result<Card, GameError> {
        if self.hand.is_empty() {
            return Err(GameError::EmptyHand {
                player: self.name.clone(),
            });
        }
        self.play(0)
    }

    pub fn toggle_protection(&mut self) {
        self.protected = !self.protected;
    }

    pub fn add_block(&mut self) {
        self.blocks = self.blocks.saturating_add(1);
    }

    /// Clears everything scoped to a round; the block tally survives.
    pub fn reset_round(&mut self) {
        self.hand.clear();
        self.used.clear();
        self.protected = false;
    }
}
