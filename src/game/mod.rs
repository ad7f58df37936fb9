//! Game engine and state management.
//!
//! [`GameState`] is a plain value and [`GameState::apply`] is the pure
//! transition function. [`Game`] is a handle that owns the current state
//! and a seeded random source for hosts that want one place to dispatch
//! actions from.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::provider::{DecisionProvider, plan_opponent_turn};
use crate::result::RoundResult;

mod actions;
mod opponent;
mod round;
pub mod scoring;
pub mod state;

pub use actions::Action;
pub use opponent::OpponentTurn;
pub use state::{GameState, GameStatus, RoundState, RoundWinner, Seat, TurnPhase};

/// A gin rummy game between the player and a simulated opponent.
///
/// Every method dispatches one [`Action`] and swaps in the resulting state.
/// Rejected actions leave the state as it was and report why.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: Mutex<GameState>,
    /// Random number generator used for shuffling.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed and deals the first round.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ginrs::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = GameState::new(options, &mut rng);

        Self {
            options,
            state: Mutex::new(state),
            rng: Mutex::new(rng),
        }
    }

    /// Applies `action` to the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is not legal in the current state; the
    /// state is left unchanged.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn dispatch(&self, action: Action) -> Result<(), ActionError> {
        let mut state = self.state.lock();
        let mut rng = self.rng.lock();

        *state = state.try_apply(action, &mut *rng)?;

        Ok(())
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> GameState {
        self.state.lock().clone()
    }

    /// Replaces the current state, returning the previous one.
    ///
    /// Intended for hosts restoring a table and for tests that need a
    /// specific deal.
    pub fn set_state(&self, state: GameState) -> GameState {
        self.state.replace(state)
    }

    /// Draws the top card of the deck for `seat`.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not `seat`'s draw or the deck is empty.
    pub fn draw_from_deck(&self, seat: Seat) -> Result<Card, ActionError> {
        self.dispatch(Action::DrawFromDeck { seat })?;
        self.last_card(seat)
    }

    /// Takes the top card of the discard pile for `seat`.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not `seat`'s draw or the pile is empty.
    pub fn draw_from_discard(&self, seat: Seat) -> Result<Card, ActionError> {
        self.dispatch(Action::DrawFromDiscard { seat })?;
        self.last_card(seat)
    }

    /// Discards `card` from `seat`'s hand.
    ///
    /// # Errors
    ///
    /// Returns an error if `seat` is not due to discard or does not hold
    /// `card`.
    pub fn discard(&self, seat: Seat, card: Card) -> Result<(), ActionError> {
        self.dispatch(Action::Discard { seat, card })
    }

    /// Passes the turn to the other seat.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played.
    pub fn end_turn(&self) -> Result<(), ActionError> {
        self.dispatch(Action::EndTurn)
    }

    /// Knocks for `seat` and returns the scored round.
    ///
    /// # Errors
    ///
    /// Returns an error if `seat` has not just discarded or has too much
    /// deadwood.
    pub fn knock(&self, seat: Seat) -> Result<RoundResult, ActionError> {
        self.dispatch(Action::Knock { seat })?;
        self.state
            .lock()
            .last_result
            .ok_or(ActionError::InvalidState)
    }

    /// Closes the round after the deck ran out.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck still has cards or no round is being
    /// played.
    pub fn resolve_exhausted_deck(&self) -> Result<RoundResult, ActionError> {
        self.dispatch(Action::ResolveExhaustedDeck)?;
        self.state
            .lock()
            .last_result
            .ok_or(ActionError::InvalidState)
    }

    /// Plays the opponent's turn with `provider` and applies the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the opponent's turn to draw; the
    /// provider is not consulted in that case.
    pub fn play_opponent_turn<P: DecisionProvider + ?Sized>(
        &self,
        provider: &mut P,
    ) -> Result<(), ActionError> {
        let action = plan_opponent_turn(&self.state(), provider)?;
        self.dispatch(action)
    }

    /// Deals the next round, keeping the scores.
    ///
    /// # Errors
    ///
    /// Returns an error unless the last round has been scored and the game is
    /// not finished.
    pub fn next_round(&self) -> Result<(), ActionError> {
        self.dispatch(Action::NextRound)
    }

    /// Starts a new game with zero scores.
    pub fn restart(&self) {
        let mut state = self.state.lock();
        let mut rng = self.rng.lock();
        *state = GameState::new(self.options, &mut *rng);
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        self.state.lock().status
    }

    /// Returns a copy of `seat`'s hand.
    pub fn hand(&self, seat: Seat) -> Hand {
        self.state.lock().hand(seat).clone()
    }

    /// Returns the cumulative score of `seat`.
    pub fn score(&self, seat: Seat) -> u32 {
        self.state.lock().score(seat)
    }

    /// Returns the top card of the discard pile.
    pub fn top_discard(&self) -> Option<Card> {
        self.state.lock().round.top_discard()
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.state.lock().round.cards_remaining()
    }

    fn last_card(&self, seat: Seat) -> Result<Card, ActionError> {
        self.state
            .lock()
            .hand(seat)
            .last()
            .ok_or(ActionError::InvalidState)
    }
}
