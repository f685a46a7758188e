//! # letterbox-engine: Deduction Card Game Engine Core
//!
//! Rule engine for a turn-based deduction card game for two or more players
//! sharing one input channel. Each round deals from a 16-card deck; players
//! draw, play one of two cards, and knock each other out until one remains or
//! the deck runs dry. The first player to win five rounds wins the game.
//!
//! ## Core Modules
//!
//! - [`cards`] - The eight card kinds and the deck composition
//! - [`deck`] - Seeded (or stacked) shuffling and drawing
//! - [`hand`] / [`pile`] - Held cards and publicly played cards
//! - [`player`] - Per-player round state and block tally
//! - [`registry`] - Roster, turn rotation, round and game winners
//! - [`rules`] - Targeting, forced-play, and guess validation
//! - [`effects`] - Resolution of each card's effect
//! - [`engine`] - Round and game orchestration
//! - [`io`] - The boundary trait the engine talks through
//! - [`events`] - Notifications sent across that boundary
//! - [`logger`] - JSONL round history
//! - [`errors`] - Contract violations and input-validation errors
//!
//! ## Deterministic Gameplay
//!
//! Shuffles are reproducible from a seed:
//!
//! ```rust
//! use letterbox_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! a.build();
//! a.shuffle();
//! b.build();
//! b.shuffle();
//! assert!(a.draw_order().eq(b.draw_order()));
//! ```
//!
//! ## Forced Play
//!
//! A Prince or King held together with the Countess must be played:
//!
//! ```rust
//! use letterbox_engine::cards::Card;
//! use letterbox_engine::hand::Hand;
//! use letterbox_engine::rules::forced_play;
//!
//! let mut hand = Hand::new();
//! hand.insert(Card::Countess).unwrap();
//! hand.insert(Card::King).unwrap();
//! assert_eq!(forced_play(&hand), Some(1));
//! ```

pub mod cards;
pub mod deck;
pub mod effects;
pub mod engine;
pub mod errors;
pub mod events;
pub mod hand;
pub mod io;
pub mod logger;
pub mod pile;
pub mod player;
pub mod registry;
pub mod rules;
