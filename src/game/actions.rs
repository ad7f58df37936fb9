use rand::Rng;
use tracing::debug;

use crate::card::{Card, HAND_SIZE};
use crate::error::ActionError;

use super::opponent::OpponentTurn;
use super::{GameState, GameStatus, Seat, TurnPhase};

/// A transition requested by a seat or reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Starts a game: fresh shuffle, zero scores.
    NewGame,
    /// Throws away the current game and starts over.
    RestartGame,
    /// Draw the top card of the deck.
    DrawFromDeck {
        /// Acting seat.
        seat: Seat,
    },
    /// Take the top card of the discard pile.
    DrawFromDiscard {
        /// Acting seat.
        seat: Seat,
    },
    /// Discard a card from hand.
    Discard {
        /// Acting seat.
        seat: Seat,
        /// Card to discard.
        card: Card,
    },
    /// Pass the turn to the other seat.
    EndTurn,
    /// End the round after discarding.
    Knock {
        /// Acting seat.
        seat: Seat,
    },
    /// Deal the next round, keeping scores.
    NextRound,
    /// The opponent's turn was played out by the host.
    OpponentTurnComplete(OpponentTurn),
    /// Close a round whose deck has run out.
    ResolveExhaustedDeck,
}

impl Action {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NewGame => "new_game",
            Self::RestartGame => "restart_game",
            Self::DrawFromDeck { .. } => "draw_from_deck",
            Self::DrawFromDiscard { .. } => "draw_from_discard",
            Self::Discard { .. } => "discard",
            Self::EndTurn => "end_turn",
            Self::Knock { .. } => "knock",
            Self::NextRound => "next_round",
            Self::OpponentTurnComplete(_) => "opponent_turn_complete",
            Self::ResolveExhaustedDeck => "resolve_exhausted_deck",
        }
    }
}

impl GameState {
    /// Applies `action` and returns the resulting state.
    ///
    /// Illegal actions (wrong seat, wrong phase, empty source, ...) leave the
    /// state unchanged. Use [`GameState::try_apply`] to learn why an action
    /// was rejected.
    #[must_use]
    pub fn apply<R: Rng + ?Sized>(&self, action: Action, rng: &mut R) -> Self {
        let name = action.name();
        self.try_apply(action, rng).unwrap_or_else(|err| {
            debug!(action = name, error = %err, "ignoring illegal action");
            self.clone()
        })
    }

    /// Applies `action`, reporting why it was rejected if it is illegal.
    ///
    /// `rng` is only consulted by actions that shuffle a new deck.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] when the action is not legal in this state.
    pub fn try_apply<R: Rng + ?Sized>(
        &self,
        action: Action,
        rng: &mut R,
    ) -> Result<Self, ActionError> {
        match action {
            Action::NewGame | Action::RestartGame => Ok(Self::new(self.options, rng)),
            Action::DrawFromDeck { seat } => self.draw_from_deck(seat),
            Action::DrawFromDiscard { seat } => self.draw_from_discard(seat),
            Action::Discard { seat, card } => self.discard(seat, card),
            Action::EndTurn => self.end_turn(),
            Action::Knock { seat } => self.knock(seat),
            Action::NextRound => self.next_round(rng),
            Action::OpponentTurnComplete(turn) => self.complete_opponent_turn(turn),
            Action::ResolveExhaustedDeck => self.resolve_exhausted_deck(),
        }
    }

    /// Checks that `seat` is due to act in `phase` of a round being played.
    pub(crate) fn ensure_turn(&self, seat: Seat, phase: TurnPhase) -> Result<(), ActionError> {
        if self.status != GameStatus::Playing {
            return Err(ActionError::InvalidState);
        }

        if self.round.turn_owner != seat {
            return Err(ActionError::NotYourTurn);
        }

        if self.round.phase != phase {
            return Err(ActionError::WrongPhase);
        }

        Ok(())
    }

    fn draw_from_deck(&self, seat: Seat) -> Result<Self, ActionError> {
        self.ensure_turn(seat, TurnPhase::Draw)?;

        let mut next = self.clone();
        let card = next.round.deck.pop().ok_or(ActionError::DeckExhausted)?;
        next.round.hand_mut(seat).add_card(card);
        next.round.phase = TurnPhase::Discard;

        Ok(next)
    }

    fn draw_from_discard(&self, seat: Seat) -> Result<Self, ActionError> {
        self.ensure_turn(seat, TurnPhase::Draw)?;

        let mut next = self.clone();
        let card = next
            .round
            .discard_pile
            .pop()
            .ok_or(ActionError::EmptyDiscardPile)?;
        next.round.hand_mut(seat).add_card(card);
        next.round.phase = TurnPhase::Discard;

        Ok(next)
    }

    fn discard(&self, seat: Seat, card: Card) -> Result<Self, ActionError> {
        self.ensure_turn(seat, TurnPhase::Discard)?;

        if self.hand(seat).len() != HAND_SIZE + 1 {
            return Err(ActionError::AlreadyDiscarded);
        }

        let mut next = self.clone();
        let hand = next.round.hand_mut(seat);
        let card = hand.remove_card(card).ok_or(ActionError::CardNotInHand)?;
        debug_assert_eq!(hand.len(), HAND_SIZE, "discard left a short hand");
        next.round.discard_pile.push(card);

        Ok(next)
    }

    fn end_turn(&self) -> Result<Self, ActionError> {
        if self.status != GameStatus::Playing {
            return Err(ActionError::InvalidState);
        }

        let mut next = self.clone();
        next.round.turn_owner = self.round.turn_owner.other();
        next.round.phase = TurnPhase::Draw;

        Ok(next)
    }
}
