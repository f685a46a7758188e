use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::effects;
use crate::errors::{GameError, InputError};
use crate::events::{GameEvent, PileView, RoundEnd, Tally};
use crate::io::GameIo;
use crate::player::PlayerId;
use crate::registry::PlayerRegistry;
use crate::rules;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0x1E77_E7B0;

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Collecting the roster
    Setup,
    /// Turns are being taken
    RoundActive,
    /// A round just ended and its winner is being credited
    RoundResolution,
    /// Someone reached the block target
    GameOver,
}

/// What a single pass through the turn loop did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TurnOutcome {
    /// The player is out of the round and was passed over
    Skipped(PlayerId),
    Played { player: PlayerId, card: Card },
}

/// Result of one finished round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub winner: PlayerId,
    pub winner_name: String,
    pub reason: RoundEnd,
    /// Used piles at the moment the round ended, rotation order
    pub piles: Vec<PileView>,
    /// Block counts after crediting the winner
    pub tallies: Vec<Tally>,
}

/// Runs rounds of the game over a [`GameIo`] boundary.
///
/// # Examples
///
/// ```
/// use letterbox_engine::engine::{Engine, Phase};
///
/// let mut engine = Engine::new(Some(7));
/// engine.add_player("Alice").unwrap();
/// engine.add_player("Bob").unwrap();
/// assert_eq!(engine.phase(), Phase::Setup);
///
/// engine.start_round().unwrap();
/// assert_eq!(engine.phase(), Phase::RoundActive);
/// // one card each, the rest stays in the deck
/// assert_eq!(engine.deck().remaining(), 14);
/// ```
#[derive(Debug)]
pub struct Engine {
    /// Draw pile, rebuilt every round
    deck: Deck,
    /// Roster and turn rotation
    players: PlayerRegistry,
    phase: Phase,
    /// 1-based number of the current (or last) round, 0 before the first
    round: u32,
}

impl Engine {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_deck(Deck::new_with_seed(seed.unwrap_or(DEFAULT_SEED)))
    }

    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            players: PlayerRegistry::new(),
            phase: Phase::Setup,
            round: 0,
        }
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }
    pub fn players_mut(&mut self) -> &mut PlayerRegistry {
        &mut self.players
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, InputError> {
        self.players.add_player(name)
    }

    /// Reads names until an empty one, skipping duplicates with a re-prompt.
    pub fn setup_players(&mut self, io: &mut dyn GameIo) -> Result<usize, GameError> {
        loop {
            let name = io.request_player_name()?;
            if name.trim().is_empty() {
                break;
            }
            match self.add_player(&name) {
                Ok(_) => io.notify(&GameEvent::PlayerJoined {
                    player: name.trim().to_string(),
                }),
                Err(e) => io.reject(&e),
            }
        }
        Ok(self.players.len())
    }

    /// Clears per-round state, rebuilds and shuffles the deck, deals one card each.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        self.players.reset_for_new_round();
        self.deck.build();
        self.deck.shuffle();
        self.players.deal(&mut self.deck)?;
        self.round += 1;
        self.phase = Phase::RoundActive;
        info!(round = self.round, players = self.players.len(), "round started");
        Ok(())
    }

    pub fn is_round_over(&self) -> bool {
        self.players.round_has_winner() || !self.deck.has_cards()
    }

    /// Advances the rotation and lets that player take one turn.
    pub fn play_turn(&mut self, io: &mut dyn GameIo) -> Result<TurnOutcome, GameError> {
        let id = self.players.current_player()?;
        if !self.players.get(id)?.has_cards() {
            debug!(player = id.0, "skipping eliminated player");
            return Ok(TurnOutcome::Skipped(id));
        }

        io.notify(&GameEvent::UsedPiles { piles: self.piles() });

        let player = self.players.get_mut(id)?;
        if player.is_protected() {
            player.toggle_protection();
            io.notify(&GameEvent::ProtectionExpired {
                player: player.name().to_string(),
            });
        }
        player.take_card(self.deck.draw()?)?;
        io.notify(&GameEvent::TurnStarted {
            player: player.name().to_string(),
            hand: player.hand().cards().to_vec(),
        });

        let position = match rules::forced_play(player.hand()) {
            Some(pos) => {
                io.notify(&GameEvent::ForcedPlay {
                    player: player.name().to_string(),
                    card: player.hand().peek(pos)?,
                });
                pos
            }
            None => self.choose_card(id, io)?,
        };

        let player = self.players.get_mut(id)?;
        let card = player.play(position)?;
        debug!(player = player.name(), ?card, "card played");
        io.notify(&GameEvent::CardPlayed {
            player: player.name().to_string(),
            card,
        });

        self.resolve_card(id, card, io)?;
        Ok(TurnOutcome::Played { player: id, card })
    }

    /// Credits the round winner with one block.
    pub fn resolve_round(&mut self, io: &mut dyn GameIo) -> Result<RoundSummary, GameError> {
        self.phase = Phase::RoundResolution;
        let (winner, reason) = match self.players.round_winner() {
            Some(id) => (id, RoundEnd::LastStanding),
            None => {
                let id = self
                    .players
                    .highest_used_pile_owner()
                    .ok_or(GameError::NoPlayers)?;
                let total = self.players.get(id)?.used().total_value();
                (id, RoundEnd::DeckExhausted { total })
            }
        };

        let piles = self.piles();
        let player = self.players.get_mut(winner)?;
        player.add_block();
        let winner_name = player.name().to_string();
        info!(round = self.round, winner = %winner_name, blocks = player.block_count(), ?reason, "round won");

        io.notify(&GameEvent::RoundWon {
            round: self.round,
            winner: winner_name.clone(),
            reason,
        });
        let tallies = self.tallies();
        io.notify(&GameEvent::BlockTally {
            tallies: tallies.clone(),
        });

        if self.players.game_winner().is_some() {
            self.phase = Phase::GameOver;
        }
        Ok(RoundSummary {
            round: self.round,
            winner,
            winner_name,
            reason,
            piles,
            tallies,
        })
    }

    /// Deals a round and plays it to elimination or exhaustion.
    pub fn play_round(&mut self, io: &mut dyn GameIo) -> Result<RoundSummary, GameError> {
        self.start_round()?;
        io.notify(&GameEvent::RoundStarted { round: self.round });
        while !self.is_round_over() {
            self.play_turn(io)?;
        }
        self.resolve_round(io)
    }

    pub fn game_winner(&self) -> Option<PlayerId> {
        self.players.game_winner()
    }

    /// Plays rounds until someone collects enough blocks.
    pub fn run(&mut self, io: &mut dyn GameIo) -> Result<PlayerId, GameError> {
        self.check_roster(io)?;
        loop {
            if let Some(winner) = self.announce_game_winner(io)? {
                return Ok(winner);
            }
            self.play_round(io)?;
        }
    }

    /// Fails on an empty roster and warns on a single player.
    pub fn check_roster(&self, io: &mut dyn GameIo) -> Result<(), GameError> {
        match self.players.len() {
            0 => Err(GameError::NoPlayers),
            1 => {
                warn!("only one player registered; every round is won on the deal");
                io.notify(&GameEvent::ShortRoster { players: 1 });
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Notifies and returns the game winner once there is one.
    pub fn announce_game_winner(
        &mut self,
        io: &mut dyn GameIo,
    ) -> Result<Option<PlayerId>, GameError> {
        let Some(id) = self.players.game_winner() else {
            return Ok(None);
        };
        self.phase = Phase::GameOver;
        let player = self.players.get(id)?;
        info!(winner = player.name(), rounds = self.round, "game won");
        io.notify(&GameEvent::GameWon {
            winner: player.name().to_string(),
            blocks: player.block_count(),
        });
        Ok(Some(id))
    }

    fn choose_card(&self, id: PlayerId, io: &mut dyn GameIo) -> Result<usize, GameError> {
        let player = self.players.get(id)?;
        loop {
            let pos = io.request_card_choice(player)?;
            match rules::validate_position(player.hand(), pos) {
                Ok(pos) => return Ok(pos),
                Err(e) => io.reject(&e),
            }
        }
    }

    fn choose_target(&self, id: PlayerId, io: &mut dyn GameIo) -> Result<PlayerId, GameError> {
        let player = self.players.get(id)?;
        loop {
            let name = io.request_opponent_name(player)?;
            match rules::validate_target(&self.players, id, &name) {
                Ok(target) => return Ok(target),
                Err(e) => io.reject(&e),
            }
        }
    }

    fn choose_guess(&self, id: PlayerId, io: &mut dyn GameIo) -> Result<Card, GameError> {
        let player = self.players.get(id)?;
        loop {
            let input = io.request_guard_guess(player)?;
            match rules::parse_guess(&input) {
                Ok(card) => return Ok(card),
                Err(e) => io.reject(&e),
            }
        }
    }

    fn resolve_card(
        &mut self,
        id: PlayerId,
        card: Card,
        io: &mut dyn GameIo,
    ) -> Result<(), GameError> {
        let mut target = None;
        let mut guess = None;
        if rules::needs_target(card) {
            if !rules::has_valid_target(&self.players, id) {
                io.notify(&GameEvent::NoValidTarget {
                    player: self.players.get(id)?.name().to_string(),
                    card,
                });
                return Ok(());
            }
            target = Some(self.choose_target(id, io)?);
            if card == Card::Guard {
                guess = Some(self.choose_guess(id, io)?);
            }
        }

        if let Some(event) =
            effects::resolve(card, id, target, guess, &mut self.players, &mut self.deck)?
        {
            io.notify(&event);
        }
        Ok(())
    }

    fn piles(&self) -> Vec<PileView> {
        self.players
            .iter()
            .map(|p| PileView {
                player: p.name().to_string(),
                cards: p.used().cards().to_vec(),
                total: p.used().total_value(),
            })
            .collect()
    }

    fn tallies(&self) -> Vec<Tally> {
        self.players
            .iter()
            .map(|p| Tally {
                player: p.name().to_string(),
                blocks: p.block_count(),
            })
            .collect()
    }
}
