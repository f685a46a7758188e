//! Text rendering of cards, piles, and engine events for the terminal.
//!
//! Everything here is a pure function from engine values to strings, so
//! the same wording shows up in tests and at the prompt.
//!
//! ## Example
//!
//! ```rust
//! use letterbox_engine::cards::Card;
//! use letterbox_cli::formatters::format_hand;
//!
//! assert_eq!(
//!     format_hand(&[Card::Guard, Card::Countess]),
//!     "[0] Guard (1)  [1] Countess (7)"
//! );
//! ```

use letterbox_engine::cards::Card;
use letterbox_engine::events::{GameEvent, PileView, RoundEnd, Tally};

pub fn format_card(card: Card) -> String {
    card.to_string()
}

/// Cards with the positions a player types to pick one.
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| format!("[{}] {}", i, format_card(*c)))
        .collect::<Vec<_>>()
        .join("  ")
}

/// One used pile, e.g. `Alice: Guard (1), Baron (3) = 4`.
pub fn format_pile(pile: &PileView) -> String {
    if pile.cards.is_empty() {
        return format!("{}: (empty)", pile.player);
    }
    let cards = pile
        .cards
        .iter()
        .map(|c| format_card(*c))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}: {} = {}", pile.player, cards, pile.total)
}

pub fn format_tallies(tallies: &[Tally]) -> String {
    tallies
        .iter()
        .map(|t| format!("{} {}", t.player, t.blocks))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Terminal wording for an engine event.
///
/// Returns `None` for events the play command reports elsewhere.
pub fn format_event(event: &GameEvent) -> Option<String> {
    let text = match event {
        GameEvent::PlayerJoined { player } => format!("{} joined the game.", player),
        GameEvent::ShortRoster { .. } => return None,
        GameEvent::RoundStarted { round } => format!("=== Round {} ===", round),
        GameEvent::UsedPiles { piles } => {
            let mut lines = vec!["Used piles:".to_string()];
            lines.extend(piles.iter().map(|p| format!("  {}", format_pile(p))));
            lines.join("\n")
        }
        GameEvent::TurnStarted { player, hand } => {
            format!("{}'s turn. Hand: {}", player, format_hand(hand))
        }
        GameEvent::ProtectionExpired { player } => {
            format!("{} is no longer protected.", player)
        }
        GameEvent::ForcedPlay { player, card } => format!(
            "{} holds the Countess and must play {}.",
            player,
            format_card(*card)
        ),
        GameEvent::CardPlayed { player, card } => {
            format!("{} played {}.", player, format_card(*card))
        }
        GameEvent::NoValidTarget { card, .. } => format!(
            "Nobody can be targeted; {} is discarded without effect.",
            format_card(*card)
        ),
        GameEvent::GuardGuess {
            player,
            target,
            guess,
            correct,
        } => {
            if *correct {
                format!(
                    "{} guessed {} correctly. {} is out of the round.",
                    player,
                    guess.name(),
                    target
                )
            } else {
                format!("{} guessed {}. {} is still in.", player, guess.name(), target)
            }
        }
        GameEvent::PriestReveal {
            viewer,
            target,
            card,
        } => format!("{}, {} is holding {}.", viewer, target, format_card(*card)),
        GameEvent::BaronComparison {
            player,
            target,
            player_card,
            target_card,
            loser,
            by_used_pile,
        } => {
            let mut s = format!(
                "{} ({}) against {} ({}): {} is out of the round.",
                player,
                format_card(*player_card),
                target,
                format_card(*target_card),
                loser
            );
            if *by_used_pile {
                s.push_str(" Decided by used piles.");
            }
            s
        }
        GameEvent::Protected { player } => {
            format!("{} is protected until their next turn.", player)
        }
        GameEvent::PrinceDiscard {
            target,
            discarded,
            redrew,
            ..
        } => {
            if *redrew {
                format!(
                    "{} discards {} and draws a new card.",
                    target,
                    format_card(*discarded)
                )
            } else {
                format!(
                    "{} discards {}. The deck is empty, so {} is out of the round.",
                    target,
                    format_card(*discarded),
                    target
                )
            }
        }
        GameEvent::KingSwap { player, target } => {
            format!("{} and {} swap hands.", player, target)
        }
        GameEvent::PrincessDiscarded { player, discarded } => format!(
            "{} discarded the Princess and is out of the round, dropping {}.",
            player,
            format_card(*discarded)
        ),
        GameEvent::RoundWon {
            round,
            winner,
            reason,
        } => match reason {
            RoundEnd::LastStanding => {
                format!("{} wins round {} as the last one standing.", winner, round)
            }
            RoundEnd::DeckExhausted { total } => format!(
                "The deck is empty. {} wins round {} with a used pile worth {}.",
                winner, round, total
            ),
        },
        GameEvent::BlockTally { tallies } => format!("Blocks: {}", format_tallies(tallies)),
        GameEvent::GameWon { winner, blocks } => {
            format!("{} wins the game with {} blocks!", winner, blocks)
        }
    };
    Some(text)
}
