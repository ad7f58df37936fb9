//! Round result types.

use crate::game::Seat;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// The knocker had no deadwood.
    Gin,
    /// The knocker had less deadwood than the defender.
    Knock,
    /// The defender matched or beat the knocker's deadwood.
    Undercut,
    /// The opponent finished its turn with no deadwood.
    OpponentGin,
}

/// Scoring details for a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub kind: RoundEnd,
    /// Seat that ended the round (the knocker, or the opponent on gin).
    pub knocker: Seat,
    /// Seat that received the points.
    pub scorer: Seat,
    /// Points added to the scorer.
    pub points: u32,
    /// The knocker's deadwood.
    pub knocker_deadwood: u32,
    /// The other seat's deadwood.
    pub defender_deadwood: u32,
    /// Whether the round was closed because the deck ran out.
    pub forced: bool,
}
