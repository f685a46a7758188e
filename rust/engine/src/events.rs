//! Notifications the engine pushes to its boundary.
//!
//! Events carry player names rather than ids so a boundary can render them
//! without holding a reference to the registry. All of them serialize to
//! tagged JSON for history files and for non-terminal frontends.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Why a round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundEnd {
    /// Every other player was knocked out
    LastStanding,
    /// The deck ran out; the winner had the highest used-pile total
    DeckExhausted { total: u32 },
}

/// One player's public discards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PileView {
    pub player: String,
    pub cards: Vec<Card>,
    pub total: u32,
}

/// One player's round wins.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    pub player: String,
    pub blocks: u32,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    PlayerJoined {
        player: String,
    },
    /// Fewer than two players; the game still runs but is trivial
    ShortRoster {
        players: usize,
    },
    RoundStarted {
        round: u32,
    },
    UsedPiles {
        piles: Vec<PileView>,
    },
    /// Private to `player`: the hand right after drawing
    TurnStarted {
        player: String,
        hand: Vec<Card>,
    },
    ProtectionExpired {
        player: String,
    },
    ForcedPlay {
        player: String,
        card: Card,
    },
    CardPlayed {
        player: String,
        card: Card,
    },
    NoValidTarget {
        player: String,
        card: Card,
    },
    GuardGuess {
        player: String,
        target: String,
        guess: Card,
        correct: bool,
    },
    /// Private to `viewer`
    PriestReveal {
        viewer: String,
        target: String,
        card: Card,
    },
    BaronComparison {
        player: String,
        target: String,
        player_card: Card,
        target_card: Card,
        loser: String,
        by_used_pile: bool,
    },
    Protected {
        player: String,
    },
    PrinceDiscard {
        player: String,
        target: String,
        discarded: Card,
        redrew: bool,
    },
    KingSwap {
        player: String,
        target: String,
    },
    PrincessDiscarded {
        player: String,
        discarded: Card,
    },
    RoundWon {
        round: u32,
        winner: String,
        reason: RoundEnd,
    },
    BlockTally {
        tallies: Vec<Tally>,
    },
    GameWon {
        winner: String,
        blocks: u32,
    },
}
