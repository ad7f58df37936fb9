//! Error types for game operations.

use thiserror::Error;

/// Reasons a transition was rejected.
///
/// [`GameState::apply`](crate::GameState::apply) treats all of these as
/// no-ops; [`GameState::try_apply`](crate::GameState::try_apply) reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is being played.
    #[error("no round is being played")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// Action does not belong to the current turn phase.
    #[error("action does not belong to the current turn phase")]
    WrongPhase,
    /// The deck is empty; the round has to be resolved instead.
    #[error("the deck is empty")]
    DeckExhausted,
    /// The deck still has cards.
    #[error("the deck still has cards")]
    DeckNotExhausted,
    /// The discard pile is empty.
    #[error("the discard pile is empty")]
    EmptyDiscardPile,
    /// The seat has already discarded this turn.
    #[error("already discarded this turn")]
    AlreadyDiscarded,
    /// Card is not in the seat's hand.
    #[error("card is not in hand")]
    CardNotInHand,
    /// The seat must discard before knocking.
    #[error("must discard before knocking")]
    MustDiscardFirst,
    /// Deadwood is above the knock limit.
    #[error("deadwood {deadwood} is above the knock limit {limit}")]
    DeadwoodTooHigh {
        /// The seat's deadwood.
        deadwood: u32,
        /// The configured knock limit.
        limit: u32,
    },
    /// The round is not over.
    #[error("the round is not over")]
    RoundNotOver,
    /// An opponent turn report does not describe a legal table.
    #[error("invalid opponent turn: {0}")]
    InvalidTurn(TurnError),
}

/// Problems with a reported opponent turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Opponent hand is not a full hand.
    #[error("opponent hand has {0} cards")]
    HandSize(usize),
    /// A card appears more than once across the table.
    #[error("duplicate card on the table")]
    DuplicateCard,
    /// Cards are missing from the table.
    #[error("table holds {0} cards")]
    CardCount(usize),
}

/// Errors returned by a decision provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider did not answer in time.
    #[error("decision provider timed out")]
    Timeout,
    /// The provider could not be reached.
    #[error("decision provider unavailable")]
    Unavailable,
    /// The provider's answer could not be understood.
    #[error("decision provider returned a malformed answer")]
    Malformed,
}
