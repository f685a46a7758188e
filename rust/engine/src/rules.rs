use crate::cards::Card;
use crate::errors::InputError;
use crate::hand::Hand;
use crate::player::PlayerId;
use crate::registry::PlayerRegistry;

/// Strength of the card that forces a royal to be played.
pub const FORCING_STRENGTH: u8 = 7;

/// Validates a targeting choice made by `actor`.
///
/// A target must be registered, unprotected, someone other than the actor,
/// and still holding a card. Checks run in that order, so the reported
/// reason is the first one that fails.
///
/// # Examples
///
/// ```
/// use letterbox_engine::errors::InputError;
/// use letterbox_engine::registry::PlayerRegistry;
/// use letterbox_engine::rules::validate_target;
///
/// let mut players = PlayerRegistry::new();
/// let alice = players.add_player("Alice").unwrap();
/// players.add_player("Bob").unwrap();
///
/// assert_eq!(validate_target(&players, alice, "Carol"), Err(InputError::UnknownPlayer));
/// assert_eq!(validate_target(&players, alice, "alice"), Err(InputError::SelfTarget));
/// // Bob has not been dealt a card yet
/// assert_eq!(validate_target(&players, alice, "bob"), Err(InputError::NoCards));
/// ```
pub fn validate_target(
    players: &PlayerRegistry,
    actor: PlayerId,
    name: &str,
) -> Result<PlayerId, InputError> {
    let id = players.find(name).ok_or(InputError::UnknownPlayer)?;
    let target = players.get(id).map_err(|_| InputError::UnknownPlayer)?;
    if target.is_protected() {
        return Err(InputError::Protected);
    }
    if id == actor {
        return Err(InputError::SelfTarget);
    }
    if !target.has_cards() {
        return Err(InputError::NoCards);
    }
    Ok(id)
}

/// Whether any player would pass [`validate_target`] for `actor`.
pub fn has_valid_target(players: &PlayerRegistry, actor: PlayerId) -> bool {
    players
        .iter()
        .any(|p| p.id() != actor && !p.is_protected() && p.has_cards())
}

/// Cards whose effect needs an opponent.
pub fn needs_target(card: Card) -> bool {
    matches!(
        card,
        Card::Guard | Card::Priest | Card::Baron | Card::Prince | Card::King
    )
}

/// Position the player is forced to play, if any.
///
/// When a Prince or King sits next to the Countess the royal card is played
/// automatically. Every other two-card hand is a free choice.
pub fn forced_play(hand: &Hand) -> Option<usize> {
    let royal = hand.royal_position()?;
    let other = if royal == 0 { 1 } else { 0 };
    match hand.peek(other) {
        Ok(c) if c.strength() == FORCING_STRENGTH => Some(royal),
        _ => None,
    }
}

/// Checks a free card choice against the hand.
pub fn validate_position(hand: &Hand, position: usize) -> Result<usize, InputError> {
    if position < hand.len() {
        Ok(position)
    } else {
        Err(InputError::InvalidPosition {
            max: hand.len().saturating_sub(1),
        })
    }
}

/// Parses a Guard guess: any card name except Guard, case-insensitive.
pub fn parse_guess(input: &str) -> Result<Card, InputError> {
    match Card::from_name(input) {
        Some(Card::Guard) => Err(InputError::GuardGuess),
        Some(card) => Ok(card),
        None => Err(InputError::UnknownCard),
    }
}
