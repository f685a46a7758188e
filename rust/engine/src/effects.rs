//! Resolution of the eight card effects.
//!
//! Every function here assumes the played card is already on the actor's
//! used pile and that the target (if any) passed
//! [`validate_target`](crate::rules::validate_target). They mutate players
//! and the deck, then describe what happened as a [`GameEvent`].

use std::mem;

use tracing::debug;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::GameEvent;
use crate::player::PlayerId;
use crate::registry::PlayerRegistry;

/// Dispatches a played card to its effect.
///
/// Targeted cards without a `target`, and a Guard without a `guess`, resolve
/// to nothing; the engine only does that when no valid target exists.
pub fn resolve(
    card: Card,
    actor: PlayerId,
    target: Option<PlayerId>,
    guess: Option<Card>,
    players: &mut PlayerRegistry,
    deck: &mut Deck,
) -> Result<Option<GameEvent>, GameError> {
    let event = match (card, target) {
        (Card::Guard, Some(t)) => match guess {
            Some(g) => guard(players, actor, t, g)?,
            None => return Ok(None),
        },
        (Card::Priest, Some(t)) => priest(players, actor, t)?,
        (Card::Baron, Some(t)) => baron(players, actor, t)?,
        (Card::Handmaiden, _) => handmaiden(players, actor)?,
        (Card::Prince, Some(t)) => prince(players, actor, t, deck)?,
        (Card::King, Some(t)) => king(players, actor, t)?,
        (Card::Princess, _) => princess(players, actor)?,
        (Card::Countess, _) | (_, None) => return Ok(None),
    };
    Ok(Some(event))
}

/// Knocks the target out if their only card is `guess`.
pub fn guard(
    players: &mut PlayerRegistry,
    actor: PlayerId,
    target: PlayerId,
    guess: Card,
) -> Result<GameEvent, GameError> {
    let player = players.get(actor)?.name().to_string();
    let opponent = players.get_mut(target)?;
    let correct = opponent.hand().peek(0)? == guess;
    if correct {
        opponent.eliminate()?;
    }
    debug!(%player, target = opponent.name(), ?guess, correct, "guard guess");
    Ok(GameEvent::GuardGuess {
        player,
        target: opponent.name().to_string(),
        guess,
        correct,
    })
}

/// Shows the target's card to the actor.
pub fn priest(
    players: &PlayerRegistry,
    actor: PlayerId,
    target: PlayerId,
) -> Result<GameEvent, GameError> {
    let opponent = players.get(target)?;
    Ok(GameEvent::PriestReveal {
        viewer: players.get(actor)?.name().to_string(),
        target: opponent.name().to_string(),
        card: opponent.hand().peek(0)?,
    })
}

/// Compares held cards; the weaker one is knocked out.
///
/// Equal cards fall back to used-pile totals. The actor only loses that
/// comparison when the target's total is strictly greater.
pub fn baron(
    players: &mut PlayerRegistry,
    actor: PlayerId,
    target: PlayerId,
) -> Result<GameEvent, GameError> {
    let (user, opponent) = players.pair_mut(actor, target)?;
    let player_card = user.hand().peek(0)?;
    let target_card = opponent.hand().peek(0)?;

    let by_used_pile = player_card == target_card;
    let user_loses = if by_used_pile {
        opponent.used().total_value() > user.used().total_value()
    } else {
        player_card.strength() < target_card.strength()
    };
    let loser = if user_loses { user } else { opponent };
    loser.eliminate()?;
    debug!(loser = loser.name(), by_used_pile, "baron comparison");

    Ok(GameEvent::BaronComparison {
        player: players.get(actor)?.name().to_string(),
        target: players.get(target)?.name().to_string(),
        player_card,
        target_card,
        loser: players
            .get(if user_loses { actor } else { target })?
            .name()
            .to_string(),
        by_used_pile,
    })
}

/// Shields the actor until their next turn.
pub fn handmaiden(players: &mut PlayerRegistry, actor: PlayerId) -> Result<GameEvent, GameError> {
    let user = players.get_mut(actor)?;
    user.toggle_protection();
    Ok(GameEvent::Protected {
        player: user.name().to_string(),
    })
}

/// The target discards their card and draws a replacement while the deck lasts.
pub fn prince(
    players: &mut PlayerRegistry,
    actor: PlayerId,
    target: PlayerId,
    deck: &mut Deck,
) -> Result<GameEvent, GameError> {
    let player = players.get(actor)?.name().to_string();
    let opponent = players.get_mut(target)?;
    let discarded = opponent.eliminate()?;
    let redrew = deck.has_cards();
    if redrew {
        opponent.take_card(deck.draw()?)?;
    }
    Ok(GameEvent::PrinceDiscard {
        player,
        target: opponent.name().to_string(),
        discarded,
        redrew,
    })
}

/// Actor and target trade hands.
pub fn king(
    players: &mut PlayerRegistry,
    actor: PlayerId,
    target: PlayerId,
) -> Result<GameEvent, GameError> {
    let (user, opponent) = players.pair_mut(actor, target)?;
    mem::swap(user.hand_mut(), opponent.hand_mut());
    Ok(GameEvent::KingSwap {
        player: user.name().to_string(),
        target: opponent.name().to_string(),
    })
}

/// Playing the Princess knocks the actor out.
pub fn princess(players: &mut PlayerRegistry, actor: PlayerId) -> Result<GameEvent, GameError> {
    let user = players.get_mut(actor)?;
    let discarded = user.eliminate()?;
    Ok(GameEvent::PrincessDiscarded {
        player: user.name().to_string(),
        discarded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::StackedShuffler;

    /// Alice and Bob each holding one card; `used` is pre-played per player.
    fn table(alice: Card, bob: Card, used: [&[Card]; 2]) -> (PlayerRegistry, PlayerId, PlayerId) {
        let mut players = PlayerRegistry::new();
        let a = players.add_player("Alice").unwrap();
        let b = players.add_player("Bob").unwrap();
        for (id, held, pile) in [(a, alice, used[0]), (b, bob, used[1])] {
            let p = players.get_mut(id).unwrap();
            for &c in pile {
                p.take_card(c).unwrap();
                p.play(0).unwrap();
            }
            p.take_card(held).unwrap();
        }
        (players, a, b)
    }

    #[test]
    fn guard_correct_guess_eliminates() {
        let (mut players, a, b) = table(Card::Priest, Card::Princess, [&[], &[]]);
        let ev = guard(&mut players, a, b, Card::Princess).unwrap();
        assert!(matches!(ev, GameEvent::GuardGuess { correct: true, .. }));
        assert!(!players.get(b).unwrap().has_cards());
        assert_eq!(players.get(b).unwrap().used().cards(), &[Card::Princess]);
    }

    #[test]
    fn guard_wrong_guess_leaves_hand() {
        let (mut players, a, b) = table(Card::Priest, Card::Princess, [&[], &[]]);
        guard(&mut players, a, b, Card::King).unwrap();
        assert_eq!(players.get(b).unwrap().hand().cards(), &[Card::Princess]);
    }

    #[test]
    fn priest_reveals_without_elimination() {
        let (mut players, a, b) = table(Card::Guard, Card::Countess, [&[], &[]]);
        let ev = priest(&players, a, b).unwrap();
        assert_eq!(
            ev,
            GameEvent::PriestReveal {
                viewer: "Alice".into(),
                target: "Bob".into(),
                card: Card::Countess
            }
        );
        assert!(players.get_mut(b).unwrap().has_cards());
    }

    #[test]
    fn baron_higher_card_wins() {
        let (mut players, a, b) = table(Card::Guard, Card::King, [&[], &[]]);
        baron(&mut players, a, b).unwrap();
        assert!(!players.get(a).unwrap().has_cards());
        assert!(players.get(b).unwrap().has_cards());
    }

    #[test]
    fn baron_tie_lower_used_pile_loses() {
        let (mut players, a, b) =
            table(Card::Priest, Card::Priest, [&[Card::Baron], &[Card::Prince]]);
        let ev = baron(&mut players, a, b).unwrap();
        assert!(matches!(ev, GameEvent::BaronComparison { by_used_pile: true, ref loser, .. } if loser == "Alice"));
        assert!(!players.get(a).unwrap().has_cards());

        let (mut players, a, b) =
            table(Card::Priest, Card::Priest, [&[Card::Prince], &[Card::Baron]]);
        baron(&mut players, a, b).unwrap();
        assert!(!players.get(b).unwrap().has_cards());
        assert!(players.get(a).unwrap().has_cards());
    }

    #[test]
    fn baron_full_tie_knocks_out_target() {
        let (mut players, a, b) =
            table(Card::Guard, Card::Guard, [&[Card::Baron], &[Card::Baron]]);
        baron(&mut players, a, b).unwrap();
        assert!(players.get(a).unwrap().has_cards());
        assert!(!players.get(b).unwrap().has_cards());
    }

    #[test]
    fn prince_discards_and_redraws() {
        let (mut players, a, b) = table(Card::Guard, Card::Baron, [&[], &[]]);
        let mut deck = Deck::with_shuffler(StackedShuffler::new(vec![Card::Handmaiden]));
        deck.build();
        deck.shuffle();
        let ev = prince(&mut players, a, b, &mut deck).unwrap();
        assert!(matches!(ev, GameEvent::PrinceDiscard { redrew: true, discarded: Card::Baron, .. }));
        assert_eq!(players.get(b).unwrap().hand().cards(), &[Card::Handmaiden]);
    }

    #[test]
    fn prince_on_empty_deck_leaves_target_out() {
        let (mut players, a, b) = table(Card::Guard, Card::Baron, [&[], &[]]);
        let mut deck = Deck::new_with_seed(1);
        prince(&mut players, a, b, &mut deck).unwrap();
        assert!(!players.get(b).unwrap().has_cards());
    }

    #[test]
    fn king_swaps_hands() {
        let (mut players, a, b) = table(Card::Guard, Card::Princess, [&[], &[]]);
        king(&mut players, a, b).unwrap();
        assert_eq!(players.get(a).unwrap().hand().cards(), &[Card::Princess]);
        assert_eq!(players.get(b).unwrap().hand().cards(), &[Card::Guard]);
    }

    #[test]
    fn princess_knocks_out_player() {
        let (mut players, a, _) = table(Card::Guard, Card::Baron, [&[Card::Princess], &[]]);
        princess(&mut players, a).unwrap();
        assert!(!players.get(a).unwrap().has_cards());
        assert_eq!(players.get(a).unwrap().used().total_value(), 9);
    }

    #[test]
    fn countess_and_missing_target_resolve_to_nothing() {
        let (mut players, a, _) = table(Card::Guard, Card::Baron, [&[], &[]]);
        let mut deck = Deck::new_with_seed(1);
        assert_eq!(
            resolve(Card::Countess, a, None, None, &mut players, &mut deck),
            Ok(None)
        );
        assert_eq!(
            resolve(Card::Baron, a, None, None, &mut players, &mut deck),
            Ok(None)
        );
    }
}
