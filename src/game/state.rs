//! Game state types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::meld::MeldAnalysis;
use crate::options::GameOptions;
use crate::result::RoundResult;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The local player.
    Player,
    /// The simulated opponent.
    Opponent,
}

impl Seat {
    /// Returns the other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// Phase within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// The turn owner must draw.
    Draw,
    /// The turn owner must discard, then end the turn or knock.
    Discard,
}

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// A round is in progress.
    Playing,
    /// The round has been scored; waiting for the next round.
    RoundOver,
    /// A seat reached the target score.
    Finished,
}

/// Winner of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundWinner {
    /// A seat won the round.
    Seat(Seat),
    /// Nobody won the round.
    Draw,
}

impl RoundWinner {
    /// Returns the winning seat, if any.
    #[must_use]
    pub const fn seat(self) -> Option<Seat> {
        match self {
            Self::Seat(seat) => Some(seat),
            Self::Draw => None,
        }
    }
}

/// Cards and turn position of the round being played.
///
/// Deck, both hands and the discard pile together always hold each of the
/// 52 cards exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Stock; cards are drawn from the end.
    pub deck: Vec<Card>,
    /// The player's hand.
    pub player_hand: Hand,
    /// The opponent's hand.
    pub opponent_hand: Hand,
    /// Discard pile; the top card is the last element.
    pub discard_pile: Vec<Card>,
    /// Seat whose turn it is.
    pub turn_owner: Seat,
    /// Phase of the current turn.
    pub phase: TurnPhase,
}

impl RoundState {
    /// Returns the hand of `seat`.
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::Player => &self.player_hand,
            Seat::Opponent => &self.opponent_hand,
        }
    }

    /// Returns the hand of `seat` mutably.
    pub const fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        match seat {
            Seat::Player => &mut self.player_hand,
            Seat::Opponent => &mut self.opponent_hand,
        }
    }

    /// Returns the top card of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}

/// Complete state of a game: the current round plus running scores.
///
/// States are values. Every transition through
/// [`GameState::apply`] returns a new state and leaves the old one intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The round being played, or the last one played.
    pub round: RoundState,
    /// The player's cumulative score.
    pub player_score: u32,
    /// The opponent's cumulative score.
    pub opponent_score: u32,
    /// Game status.
    pub status: GameStatus,
    /// Winner of the last scored round, cleared when a new round starts.
    pub round_winner: Option<RoundWinner>,
    /// Winner of the game once it is finished.
    pub game_winner: Option<Seat>,
    /// Scoring details of the last scored round.
    pub last_result: Option<RoundResult>,
    /// Rules in effect.
    pub options: GameOptions,
}

impl GameState {
    /// Returns the cumulative score of `seat`.
    #[must_use]
    pub const fn score(&self, seat: Seat) -> u32 {
        match seat {
            Seat::Player => self.player_score,
            Seat::Opponent => self.opponent_score,
        }
    }

    pub(super) const fn score_mut(&mut self, seat: Seat) -> &mut u32 {
        match seat {
            Seat::Player => &mut self.player_score,
            Seat::Opponent => &mut self.opponent_score,
        }
    }

    /// Returns the hand of `seat`.
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Hand {
        self.round.hand(seat)
    }

    /// Returns the deadwood total of `seat`'s hand.
    #[must_use]
    pub fn deadwood(&self, seat: Seat) -> u32 {
        self.hand(seat).deadwood()
    }

    /// Returns the melds and deadwood of `seat`'s hand.
    #[must_use]
    pub fn melds(&self, seat: Seat) -> MeldAnalysis {
        self.hand(seat).melds()
    }

    /// Returns whether `seat` may knock right now.
    #[must_use]
    pub fn can_knock(&self, seat: Seat) -> bool {
        self.check_knock(seat).is_ok()
    }

    /// Returns whether the turn owner has drawn and discarded this turn.
    #[must_use]
    pub fn has_discarded(&self) -> bool {
        self.round.phase == TurnPhase::Discard
            && self.hand(self.round.turn_owner).len() == crate::card::HAND_SIZE
    }
}
