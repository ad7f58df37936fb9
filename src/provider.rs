//! The seam to whatever decides the opponent's moves.
//!
//! A provider may be slow or unreliable (a remote model, a user on another
//! thread); the engine only ever sees its answer, or a fallback when there
//! is none. [`plan_opponent_turn`] turns the answers into a single
//! [`Action`] that is always legal to feed back into the state.

use alloc::vec::Vec;

use tracing::warn;

use crate::card::Card;
use crate::error::{ActionError, ProviderError};
use crate::game::{Action, GameState, OpponentTurn, Seat, TurnPhase};
use crate::hand::Hand;
use crate::meld;

/// What the provider is asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionRequest {
    /// The deciding seat's hand: 10 cards before drawing, 11 before
    /// discarding.
    pub hand: Vec<Card>,
    /// Top of the discard pile when the draw is being decided.
    pub top_discard: Option<Card>,
}

/// The provider's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decision {
    /// Take the top discard instead of drawing from the deck.
    pub take_discard: bool,
    /// Card to discard, when deciding the discard.
    pub card_to_discard: Option<Card>,
}

impl Decision {
    /// Decision used when the provider fails: draw from the deck and shed
    /// the highest-value card (the last one in hand order on ties).
    #[must_use]
    pub fn fallback(hand: &[Card]) -> Self {
        Self {
            take_discard: false,
            card_to_discard: hand.iter().copied().max_by_key(Card::value),
        }
    }
}

/// Something that chooses the opponent's moves.
pub trait DecisionProvider {
    /// Answers a draw or discard question.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when no decision could be made; the
    /// engine falls back to [`Decision::fallback`].
    fn decide(&mut self, request: &DecisionRequest) -> Result<Decision, ProviderError>;
}

impl<F> DecisionProvider for F
where
    F: FnMut(&DecisionRequest) -> Result<Decision, ProviderError>,
{
    fn decide(&mut self, request: &DecisionRequest) -> Result<Decision, ProviderError> {
        self(request)
    }
}

/// Local provider that minimises deadwood with the greedy meld search.
///
/// Takes the discard only when it lowers the best reachable deadwood, and
/// discards the card whose removal leaves the least deadwood.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinDeadwood;

impl MinDeadwood {
    fn best_discard(hand: &[Card]) -> Option<(Card, u32)> {
        hand.iter()
            .map(|&card| {
                let rest: Vec<Card> = hand.iter().copied().filter(|c| *c != card).collect();
                (card, meld::deadwood(&rest))
            })
            .min_by_key(|&(card, deadwood)| (deadwood, core::cmp::Reverse(card.value())))
    }
}

impl DecisionProvider for MinDeadwood {
    fn decide(&mut self, request: &DecisionRequest) -> Result<Decision, ProviderError> {
        if let Some(top) = request.top_discard {
            let mut with_top = request.hand.clone();
            with_top.push(top);
            let take = Self::best_discard(&with_top).is_some_and(|(card, deadwood)| {
                card != top && deadwood < meld::deadwood(&request.hand)
            });
            return Ok(Decision {
                take_discard: take,
                card_to_discard: None,
            });
        }

        Ok(Decision {
            take_discard: false,
            card_to_discard: Self::best_discard(&request.hand).map(|(card, _)| card),
        })
    }
}

fn consult<P: DecisionProvider + ?Sized>(provider: &mut P, request: &DecisionRequest) -> Decision {
    provider.decide(request).unwrap_or_else(|err| {
        warn!(
            error = %err,
            hand_size = request.hand.len(),
            "decision provider failed, using fallback"
        );
        Decision::fallback(&request.hand)
    })
}

/// Plays the opponent's turn in `state` by consulting `provider`.
///
/// The provider is asked twice: whether to take the top discard, then which
/// card to shed. A discard choice that is missing or not in hand falls back
/// to the last card in hand order. With an empty deck and no discard taken
/// the round cannot continue and [`Action::ResolveExhaustedDeck`] is
/// returned.
///
/// # Errors
///
/// Returns an error without consulting `provider` unless the opponent is
/// due to draw in a round being played.
pub fn plan_opponent_turn<P: DecisionProvider + ?Sized>(
    state: &GameState,
    provider: &mut P,
) -> Result<Action, ActionError> {
    state.ensure_turn(Seat::Opponent, TurnPhase::Draw)?;

    let round = &state.round;
    let mut deck = round.deck.clone();
    let mut discard_pile = round.discard_pile.clone();
    let mut hand = round.opponent_hand.clone();

    let draw = consult(
        provider,
        &DecisionRequest {
            hand: hand.cards().to_vec(),
            top_discard: round.top_discard(),
        },
    );

    let drawn = if draw.take_discard && !discard_pile.is_empty() {
        discard_pile.pop()
    } else {
        deck.pop()
    };
    let Some(drawn) = drawn else {
        return Ok(Action::ResolveExhaustedDeck);
    };
    hand.add_card(drawn);

    let choice = consult(
        provider,
        &DecisionRequest {
            hand: hand.cards().to_vec(),
            top_discard: None,
        },
    );

    if let Some(card) = chosen_discard(&hand, choice).and_then(|card| hand.remove_card(card)) {
        discard_pile.push(card);
    }

    Ok(Action::OpponentTurnComplete(OpponentTurn {
        deck,
        discard_pile,
        opponent_hand: hand.cards().to_vec(),
    }))
}

fn chosen_discard(hand: &Hand, decision: Decision) -> Option<Card> {
    match decision.card_to_discard {
        Some(card) if hand.contains(card) => Some(card),
        _ => hand.last(),
    }
}
