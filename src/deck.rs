//! Deck construction, shuffling and dealing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit};

/// Builds the 52-card deck in canonical order (suit-major, rank-minor).
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Returns a uniformly shuffled copy of `deck`.
///
/// The input is left untouched. The permutation is a Fisher-Yates shuffle
/// driven entirely by `rng`, so a seeded generator reproduces it.
#[must_use]
pub fn shuffle<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Result of dealing a shuffled deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// First ten cards.
    pub player_hand: Vec<Card>,
    /// Next ten cards.
    pub opponent_hand: Vec<Card>,
    /// Everything after the two hands, in deck order.
    pub remaining_deck: Vec<Card>,
}

/// Splits a deck into two hands and the remaining stock by position.
///
/// Decks shorter than two hands give short hands and an empty stock.
#[must_use]
pub fn deal(mut deck: Vec<Card>) -> Deal {
    let remaining_deck = deck.split_off((HAND_SIZE * 2).min(deck.len()));
    let opponent_hand = deck.split_off(HAND_SIZE.min(deck.len()));

    Deal {
        player_hand: deck,
        opponent_hand,
        remaining_deck,
    }
}

/// Returns `cards` in display order: suit order first, then rank ascending.
#[must_use]
pub fn sort_hand(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|card| (card.suit().index(), card.rank().index()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_slices_by_position() {
        let deck = build_deck();
        let dealt = deal(deck.clone());

        assert_eq!(dealt.player_hand, deck[..10]);
        assert_eq!(dealt.opponent_hand, deck[10..20]);
        assert_eq!(dealt.remaining_deck, deck[20..]);
    }

    #[test]
    fn deal_short_deck() {
        let deck = build_deck()[..12].to_vec();
        let dealt = deal(deck);

        assert_eq!(dealt.player_hand.len(), 10);
        assert_eq!(dealt.opponent_hand.len(), 2);
        assert!(dealt.remaining_deck.is_empty());
    }

    #[test]
    fn sort_hand_orders_suit_then_rank() {
        let hand = [
            Card::new(Suit::Spades, Rank::Two),
            Card::new(Suit::Hearts, Rank::King),
            Card::new(Suit::Hearts, Rank::Ace),
            Card::new(Suit::Clubs, Rank::Five),
        ];

        assert_eq!(
            sort_hand(&hand),
            [
                Card::new(Suit::Hearts, Rank::Ace),
                Card::new(Suit::Hearts, Rank::King),
                Card::new(Suit::Clubs, Rank::Five),
                Card::new(Suit::Spades, Rank::Two),
            ]
        );
    }
}
