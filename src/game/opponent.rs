//! Opponent turns played out by the host.
//!
//! The host draws and discards on the opponent's behalf (usually after
//! consulting a [`DecisionProvider`](crate::provider::DecisionProvider))
//! and reports the resulting table in one event.

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use tracing::debug;

use crate::card::{Card, DECK_SIZE, HAND_SIZE};
use crate::error::{ActionError, TurnError};
use crate::hand::Hand;

use super::scoring::score_opponent_gin;
use super::{GameState, Seat, TurnPhase};

/// Table after the opponent drew and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentTurn {
    /// The deck after the opponent's draw.
    pub deck: Vec<Card>,
    /// The discard pile after the opponent's discard.
    pub discard_pile: Vec<Card>,
    /// The opponent's hand after discarding.
    pub opponent_hand: Vec<Card>,
}

impl OpponentTurn {
    /// Checks that the report, together with `player_hand`, holds every card
    /// exactly once and leaves the opponent with a full hand.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self, player_hand: &Hand) -> Result<(), TurnError> {
        if self.opponent_hand.len() != HAND_SIZE {
            return Err(TurnError::HandSize(self.opponent_hand.len()));
        }

        let total = self.deck.len()
            + self.discard_pile.len()
            + self.opponent_hand.len()
            + player_hand.len();
        if total != DECK_SIZE {
            return Err(TurnError::CardCount(total));
        }

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let all = self
            .deck
            .iter()
            .chain(&self.discard_pile)
            .chain(&self.opponent_hand)
            .chain(player_hand.cards());
        for card in all {
            if !seen.insert(*card) {
                return Err(TurnError::DuplicateCard);
            }
        }

        Ok(())
    }
}

impl GameState {
    pub(super) fn complete_opponent_turn(&self, turn: OpponentTurn) -> Result<Self, ActionError> {
        self.ensure_turn(Seat::Opponent, TurnPhase::Draw)?;
        turn.validate(&self.round.player_hand)
            .map_err(ActionError::InvalidTurn)?;

        let mut next = self.clone();
        next.round.deck = turn.deck;
        next.round.discard_pile = turn.discard_pile;
        next.round.opponent_hand = Hand::from_cards(turn.opponent_hand);

        if next.round.opponent_hand.is_gin() {
            let result = score_opponent_gin(next.deadwood(Seat::Player), &next.options);
            next.settle(result);
            return Ok(next);
        }

        debug!(
            cards_remaining = next.round.deck.len(),
            "opponent turn complete"
        );
        next.round.turn_owner = Seat::Player;
        next.round.phase = TurnPhase::Draw;

        Ok(next)
    }
}
