//! Starting games and rounds.

use rand::Rng;
use tracing::info;

use crate::deck::{Deal, build_deck, deal, shuffle};
use crate::error::ActionError;
use crate::hand::Hand;
use crate::options::GameOptions;

use super::{GameState, GameStatus, RoundState, RoundWinner, Seat, TurnPhase};

impl RoundState {
    /// Shuffles a fresh deck, deals both hands and turns one card up to
    /// start the discard pile.
    #[must_use]
    pub fn deal<R: Rng + ?Sized>(rng: &mut R, turn_owner: Seat) -> Self {
        let Deal {
            player_hand,
            opponent_hand,
            mut remaining_deck,
        } = deal(shuffle(&build_deck(), rng));
        let discard_pile = remaining_deck.pop().into_iter().collect();

        Self {
            deck: remaining_deck,
            player_hand: Hand::from_cards(player_hand),
            opponent_hand: Hand::from_cards(opponent_hand),
            discard_pile,
            turn_owner,
            phase: TurnPhase::Draw,
        }
    }
}

impl GameState {
    /// Starts a new game with zero scores.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> Self {
        info!(first_turn = ?options.first_turn, "starting game");

        Self {
            round: RoundState::deal(rng, options.first_turn),
            player_score: 0,
            opponent_score: 0,
            status: GameStatus::Playing,
            round_winner: None,
            game_winner: None,
            last_result: None,
            options,
        }
    }

    /// Deals the next round. The previous round's winner goes first; after
    /// a round without a winner the configured first seat does.
    pub(super) fn next_round<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, ActionError> {
        if self.status != GameStatus::RoundOver {
            return Err(ActionError::RoundNotOver);
        }

        let first = self
            .round_winner
            .and_then(RoundWinner::seat)
            .unwrap_or(self.options.first_turn);

        info!(
            first_turn = ?first,
            player_score = self.player_score,
            opponent_score = self.opponent_score,
            "dealing next round"
        );

        Ok(Self {
            round: RoundState::deal(rng, first),
            status: GameStatus::Playing,
            round_winner: None,
            game_winner: None,
            last_result: None,
            ..self.clone()
        })
    }
}
