//! A Gin Rummy rules engine with optional `no_std` support.
//!
//! The crate models a two-seat game of gin rummy: dealing, the draw/discard
//! turn cycle, greedy meld detection, deadwood counting and knock, gin and
//! undercut scoring up to a target score.
//!
//! [`GameState`] is a value and [`GameState::apply`] is a pure transition
//! function over [`Action`]s. [`Game`] wraps a state and a seeded random
//! source for hosts that prefer a stateful handle. Opponent moves come from
//! a [`DecisionProvider`].
//!
//! # Example
//!
//! ```no_run
//! use ginrs::{Game, GameOptions, Seat};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let card = game.draw_from_deck(Seat::Player).unwrap();
//! game.discard(Seat::Player, card).unwrap();
//! game.end_turn().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod meld;
pub mod options;
pub mod provider;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit};
pub use deck::{Deal, build_deck, deal, shuffle, sort_hand};
pub use error::{ActionError, ProviderError, TurnError};
pub use game::{
    Action, Game, GameState, GameStatus, OpponentTurn, RoundState, RoundWinner, Seat, TurnPhase,
};
pub use hand::Hand;
pub use meld::{Meld, MeldAnalysis, MeldKind, check_for_gin, deadwood, find_melds};
pub use options::GameOptions;
pub use provider::{Decision, DecisionProvider, DecisionRequest, MinDeadwood, plan_opponent_turn};
pub use result::{RoundEnd, RoundResult};
