//! Knock, gin and undercut scoring.

use tracing::info;

use crate::card::HAND_SIZE;
use crate::error::ActionError;
use crate::options::GameOptions;
use crate::result::{RoundEnd, RoundResult};

use super::{GameState, GameStatus, RoundWinner, Seat, TurnPhase};

/// Scores a knock by `knocker`.
///
/// Gin pays the knocker the defender's deadwood plus the gin bonus. A
/// plain knock pays the difference. When the defender's deadwood is not
/// higher than the knocker's, the defender scores the difference plus the
/// undercut bonus.
#[must_use]
pub fn score_knock(
    knocker: Seat,
    knocker_deadwood: u32,
    defender_deadwood: u32,
    options: &GameOptions,
) -> RoundResult {
    let (kind, scorer, points) = if knocker_deadwood == 0 {
        (
            RoundEnd::Gin,
            knocker,
            defender_deadwood + options.gin_bonus,
        )
    } else if knocker_deadwood < defender_deadwood {
        (
            RoundEnd::Knock,
            knocker,
            defender_deadwood - knocker_deadwood,
        )
    } else {
        (
            RoundEnd::Undercut,
            knocker.other(),
            knocker_deadwood - defender_deadwood + options.undercut_bonus,
        )
    };

    RoundResult {
        kind,
        knocker,
        scorer,
        points,
        knocker_deadwood,
        defender_deadwood,
        forced: false,
    }
}

/// Scores the opponent going gin at the end of its turn.
#[must_use]
pub const fn score_opponent_gin(player_deadwood: u32, options: &GameOptions) -> RoundResult {
    RoundResult {
        kind: RoundEnd::OpponentGin,
        knocker: Seat::Opponent,
        scorer: Seat::Opponent,
        points: player_deadwood + options.gin_bonus,
        knocker_deadwood: 0,
        defender_deadwood: player_deadwood,
        forced: false,
    }
}

impl GameState {
    pub(super) fn check_knock(&self, seat: Seat) -> Result<(), ActionError> {
        self.ensure_turn(seat, TurnPhase::Discard)?;

        if self.hand(seat).len() != HAND_SIZE {
            return Err(ActionError::MustDiscardFirst);
        }

        let deadwood = self.deadwood(seat);
        let limit = self.options.knock_limit;
        if deadwood > limit {
            return Err(ActionError::DeadwoodTooHigh { deadwood, limit });
        }

        Ok(())
    }

    pub(super) fn knock(&self, seat: Seat) -> Result<Self, ActionError> {
        self.check_knock(seat)?;

        let result = score_knock(
            seat,
            self.deadwood(seat),
            self.deadwood(seat.other()),
            &self.options,
        );

        let mut next = self.clone();
        next.settle(result);
        Ok(next)
    }

    /// Closes a round whose deck ran out as if the seat that discarded last
    /// had knocked, whatever its deadwood.
    pub(super) fn resolve_exhausted_deck(&self) -> Result<Self, ActionError> {
        if self.status != GameStatus::Playing {
            return Err(ActionError::InvalidState);
        }

        if !self.round.deck.is_empty() {
            return Err(ActionError::DeckNotExhausted);
        }

        if self.round.phase != TurnPhase::Draw {
            return Err(ActionError::WrongPhase);
        }

        let knocker = self.round.turn_owner.other();
        let result = RoundResult {
            forced: true,
            ..score_knock(
                knocker,
                self.deadwood(knocker),
                self.deadwood(knocker.other()),
                &self.options,
            )
        };

        let mut next = self.clone();
        next.settle(result);
        Ok(next)
    }

    /// Credits a scored round and moves to `RoundOver` or `Finished`.
    pub(super) fn settle(&mut self, result: RoundResult) {
        *self.score_mut(result.scorer) += result.points;

        let target = self.options.target_score;
        let player = self.player_score;
        let opponent = self.opponent_score;

        info!(
            kind = ?result.kind,
            scorer = ?result.scorer,
            points = result.points,
            player_score = player,
            opponent_score = opponent,
            forced = result.forced,
            "round scored"
        );

        self.round_winner = Some(RoundWinner::Seat(result.scorer));
        self.last_result = Some(result);

        if player >= target || opponent >= target {
            let winner = match player.cmp(&opponent) {
                core::cmp::Ordering::Greater => Seat::Player,
                core::cmp::Ordering::Less => Seat::Opponent,
                core::cmp::Ordering::Equal => result.scorer,
            };
            info!(winner = ?winner, player_score = player, opponent_score = opponent, "game over");
            self.status = GameStatus::Finished;
            self.game_winner = Some(winner);
        } else {
            self.status = GameStatus::RoundOver;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knock_pays_the_difference() {
        let result = score_knock(Seat::Player, 5, 18, &GameOptions::default());
        assert_eq!(result.kind, RoundEnd::Knock);
        assert_eq!(result.scorer, Seat::Player);
        assert_eq!(result.points, 13);
    }

    #[test]
    fn undercut_pays_the_defender() {
        let result = score_knock(Seat::Player, 8, 5, &GameOptions::default());
        assert_eq!(result.kind, RoundEnd::Undercut);
        assert_eq!(result.scorer, Seat::Opponent);
        assert_eq!(result.points, 28);
    }

    #[test]
    fn equal_deadwood_is_an_undercut() {
        let result = score_knock(Seat::Opponent, 6, 6, &GameOptions::default());
        assert_eq!(result.kind, RoundEnd::Undercut);
        assert_eq!(result.scorer, Seat::Player);
        assert_eq!(result.points, 25);
    }

    #[test]
    fn gin_pays_deadwood_plus_bonus() {
        let result = score_knock(Seat::Player, 0, 14, &GameOptions::default());
        assert_eq!(result.kind, RoundEnd::Gin);
        assert_eq!(result.points, 39);

        let both_zero = score_knock(Seat::Player, 0, 0, &GameOptions::default());
        assert_eq!(both_zero.kind, RoundEnd::Gin);
        assert_eq!(both_zero.points, 25);
    }

    #[test]
    fn bonuses_follow_options() {
        let options = GameOptions::default()
            .with_gin_bonus(20)
            .with_undercut_bonus(10);
        assert_eq!(score_knock(Seat::Player, 0, 4, &options).points, 24);
        assert_eq!(score_knock(Seat::Player, 9, 4, &options).points, 15);
        assert_eq!(score_opponent_gin(7, &options).points, 27);
    }
}
