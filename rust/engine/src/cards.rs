use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight card kinds. Discriminants are the card strengths.
/// Copies of the same kind are interchangeable, so a card is just its kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Card {
    /// Guess an opponent's card to knock them out (1)
    Guard = 1,
    /// Look at an opponent's card (2)
    Priest,
    /// Compare cards, lower is knocked out (3)
    Baron,
    /// Protection until the player's next turn (4)
    Handmaiden,
    /// Opponent discards and redraws (5)
    Prince,
    /// Trade hands with an opponent (6)
    King,
    /// No effect, triggers the forced-play rule (7)
    Countess,
    /// Knocks out whoever plays it (8)
    Princess,
}

/// Strength of the cards that trigger the forced-play rule alongside the Countess.
pub const ROYAL_STRENGTHS: [u8; 2] = [5, 6];

/// Number of cards in a freshly built deck.
pub const DECK_SIZE: usize = 16;

impl Card {
    pub fn strength(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Card::Guard => "Guard",
            Card::Priest => "Priest",
            Card::Baron => "Baron",
            Card::Handmaiden => "Handmaiden",
            Card::Prince => "Prince",
            Card::King => "King",
            Card::Countess => "Countess",
            Card::Princess => "Princess",
        }
    }

    /// How many copies of this kind go into one deck.
    pub fn copies(self) -> usize {
        match self {
            Card::Guard => 5,
            Card::Priest | Card::Baron | Card::Handmaiden | Card::Prince => 2,
            Card::King | Card::Countess | Card::Princess => 1,
        }
    }

    pub fn is_royal(self) -> bool {
        ROYAL_STRENGTHS.contains(&self.strength())
    }

    pub fn from_strength(v: u8) -> Option<Card> {
        all_cards().into_iter().find(|c| c.strength() == v)
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Card> {
        let name = name.trim();
        all_cards()
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.strength())
    }
}

pub fn all_cards() -> [Card; 8] {
    [
        Card::Guard,
        Card::Priest,
        Card::Baron,
        Card::Handmaiden,
        Card::Prince,
        Card::King,
        Card::Countess,
        Card::Princess,
    ]
}

/// The fixed 16-card composition in build order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for c in all_cards() {
        v.extend(std::iter::repeat_n(c, c.copies()));
    }
    v
}
