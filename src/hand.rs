//! Hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::sort_hand;
use crate::meld::{self, MeldAnalysis};

/// A seat's hand.
///
/// The hand is unordered as far as the rules are concerned; the stored
/// order is the order cards were dealt or drawn, which the discard
/// fallbacks rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes `card` from the hand, returning it if it was present.
    pub fn remove_card(&mut self, card: Card) -> Option<Card> {
        let position = self.cards.iter().position(|c| *c == card)?;
        Some(self.cards.remove(position))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether `card` is in the hand.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the last card in hand order.
    #[must_use]
    pub fn last(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Partitions the hand into melds and deadwood.
    #[must_use]
    pub fn melds(&self) -> MeldAnalysis {
        meld::find_melds(&self.cards)
    }

    /// Deadwood point total of the hand.
    #[must_use]
    pub fn deadwood(&self) -> u32 {
        meld::deadwood(&self.cards)
    }

    /// Returns whether every card in the hand is melded.
    #[must_use]
    pub fn is_gin(&self) -> bool {
        meld::check_for_gin(&self.cards)
    }

    /// Returns the cards in display order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Card> {
        sort_hand(&self.cards)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}
