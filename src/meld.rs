//! Meld detection and deadwood counting.
//!
//! The partition is greedy: sets are claimed first, then runs are scanned
//! suit by suit without backtracking. For hands where a card could serve
//! either a set or an overlapping run this is not always the partition with
//! the least deadwood, and scoring depends on it staying that way.

use alloc::vec;
use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};

/// Smallest number of cards in a meld.
pub const MIN_MELD_LEN: usize = 3;

/// Kind of meld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeldKind {
    /// Three or four cards of one rank.
    Set,
    /// Three or more consecutive cards of one suit.
    Run,
}

/// A group of cards that scores no deadwood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meld {
    kind: MeldKind,
    cards: Vec<Card>,
}

impl Meld {
    /// Returns the kind of meld.
    #[must_use]
    pub const fn kind(&self) -> MeldKind {
        self.kind
    }

    /// Returns the cards of the meld. Runs are in rank order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the meld.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the meld holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the cards satisfy the rules for the meld's kind.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self.kind {
            MeldKind::Set => is_valid_set(&self.cards),
            MeldKind::Run => is_valid_run(&self.cards),
        }
    }
}

/// Melds and leftover cards of a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeldAnalysis {
    /// Sets first (by rank), then runs (by suit).
    pub melds: Vec<Meld>,
    /// Cards outside every meld, rank ascending.
    pub remaining: Vec<Card>,
}

impl MeldAnalysis {
    /// Sum of the point values of the remaining cards.
    #[must_use]
    pub fn deadwood(&self) -> u32 {
        self.remaining.iter().map(Card::value).sum()
    }

    /// Returns whether the analysis left no deadwood.
    #[must_use]
    pub fn is_gin(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Partitions `hand` into melds and deadwood.
///
/// Never fails: a hand with fewer than three cards, or without any
/// matching rank or suit sequence, returns every card as deadwood.
#[must_use]
pub fn find_melds(hand: &[Card]) -> MeldAnalysis {
    let mut cards = hand.to_vec();
    cards.sort_by_key(|card| card.rank().index());

    let mut consumed = vec![false; cards.len()];
    let mut melds = Vec::new();

    for rank in Rank::ALL {
        let members: Vec<usize> = (0..cards.len())
            .filter(|&i| cards[i].rank() == rank)
            .collect();
        if members.len() < MIN_MELD_LEN {
            continue;
        }

        for &i in &members {
            consumed[i] = true;
        }
        melds.push(Meld {
            kind: MeldKind::Set,
            cards: members.iter().map(|&i| cards[i]).collect(),
        });
    }

    for suit in Suit::ALL {
        // Indices into the rank-sorted cards, so the group is rank ascending.
        let group: Vec<usize> = (0..cards.len())
            .filter(|&i| !consumed[i] && cards[i].suit() == suit)
            .collect();

        let mut start = 0;
        while start + MIN_MELD_LEN <= group.len() {
            let run = run_from(&cards, &group[start..]);
            if run.len() < MIN_MELD_LEN {
                start += 1;
                continue;
            }

            for &i in &run {
                consumed[i] = true;
            }
            start += run.len();
            melds.push(Meld {
                kind: MeldKind::Run,
                cards: run.iter().map(|&i| cards[i]).collect(),
            });
        }
    }

    let remaining = cards
        .iter()
        .zip(&consumed)
        .filter(|(_, used)| !**used)
        .map(|(card, _)| *card)
        .collect();

    MeldAnalysis { melds, remaining }
}

/// Extends a run from the first index of `group` as far as ranks stay
/// consecutive.
fn run_from(cards: &[Card], group: &[usize]) -> Vec<usize> {
    let Some((&first, rest)) = group.split_first() else {
        return Vec::new();
    };

    let mut run = vec![first];
    let mut last = cards[first].rank().index();
    for &i in rest {
        if cards[i].rank().index() == last + 1 {
            run.push(i);
            last += 1;
        }
    }
    run
}

/// Deadwood point total of `hand`.
#[must_use]
pub fn deadwood(hand: &[Card]) -> u32 {
    find_melds(hand).deadwood()
}

/// Returns whether `hand` has zero deadwood.
#[must_use]
pub fn check_for_gin(hand: &[Card]) -> bool {
    deadwood(hand) == 0
}

/// Returns whether `cards` form a set: 3–4 cards of one rank, distinct suits.
#[must_use]
pub fn is_valid_set(cards: &[Card]) -> bool {
    let Some(first) = cards.first() else {
        return false;
    };
    if !(MIN_MELD_LEN..=Suit::ALL.len()).contains(&cards.len()) {
        return false;
    }

    let mut seen = [false; 4];
    cards.iter().all(|card| {
        let suit = card.suit().index();
        let fresh = !seen[suit];
        seen[suit] = true;
        card.rank() == first.rank() && fresh
    })
}

/// Returns whether `cards`, in the given order, form a run: 3+ cards of one
/// suit with strictly consecutive ranks, Ace low.
#[must_use]
pub fn is_valid_run(cards: &[Card]) -> bool {
    cards.len() >= MIN_MELD_LEN
        && cards.windows(2).all(|pair| {
            pair[0].suit() == pair[1].suit()
                && pair[1].rank().index() == pair[0].rank().index() + 1
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank::{Ace, Five, Four, Jack, King, Nine, Queen, Seven, Six, Three, Two};
    use crate::card::Suit::{Clubs, Diamonds, Hearts, Spades};

    const fn c(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn set_takes_all_four_of_a_rank() {
        let hand = [
            c(Hearts, Nine),
            c(Spades, Nine),
            c(Clubs, Nine),
            c(Diamonds, Nine),
            c(Hearts, Two),
        ];
        let analysis = find_melds(&hand);

        assert_eq!(analysis.melds.len(), 1);
        assert_eq!(analysis.melds[0].kind(), MeldKind::Set);
        assert_eq!(analysis.melds[0].len(), 4);
        assert_eq!(analysis.remaining, [c(Hearts, Two)]);
    }

    #[test]
    fn set_keeps_hand_order_within_rank() {
        let hand = [c(Spades, Four), c(Hearts, Four), c(Clubs, Four)];
        let analysis = find_melds(&hand);

        assert_eq!(analysis.melds[0].cards(), hand);
    }

    #[test]
    fn run_scan_resumes_after_emitted_run() {
        let hand = [
            c(Hearts, Ace),
            c(Hearts, Two),
            c(Hearts, Three),
            c(Hearts, Five),
            c(Hearts, Six),
            c(Hearts, Seven),
        ];
        let analysis = find_melds(&hand);

        assert_eq!(analysis.melds.len(), 2);
        assert!(analysis.melds.iter().all(|m| m.kind() == MeldKind::Run));
        assert_eq!(analysis.deadwood(), 0);
    }

    #[test]
    fn run_skips_a_gap_and_restarts() {
        let hand = [
            c(Clubs, Two),
            c(Clubs, Four),
            c(Clubs, Five),
            c(Clubs, Six),
        ];
        let analysis = find_melds(&hand);

        assert_eq!(analysis.melds.len(), 1);
        assert_eq!(
            analysis.melds[0].cards(),
            [c(Clubs, Four), c(Clubs, Five), c(Clubs, Six)]
        );
        assert_eq!(analysis.remaining, [c(Clubs, Two)]);
    }

    #[test]
    fn ace_does_not_wrap_to_king() {
        let hand = [c(Spades, Queen), c(Spades, King), c(Spades, Ace)];
        let analysis = find_melds(&hand);

        assert!(analysis.melds.is_empty());
        assert_eq!(analysis.deadwood(), 21);
    }

    #[test]
    fn greedy_set_wins_over_overlapping_run() {
        // Three fives form a set, which strands 4♥ and 6♥ that could have
        // been a run with 5♥.
        let hand = [
            c(Hearts, Four),
            c(Hearts, Five),
            c(Hearts, Six),
            c(Spades, Five),
            c(Clubs, Five),
        ];
        let analysis = find_melds(&hand);

        assert_eq!(analysis.melds.len(), 1);
        assert_eq!(analysis.melds[0].kind(), MeldKind::Set);
        assert_eq!(analysis.deadwood(), 10);
    }

    #[test]
    fn short_hand_is_all_deadwood() {
        let hand = [c(Hearts, Jack), c(Hearts, Queen)];
        let analysis = find_melds(&hand);

        assert!(analysis.melds.is_empty());
        assert_eq!(analysis.remaining.len(), 2);
        assert_eq!(analysis.deadwood(), 20);
        assert!(find_melds(&[]).remaining.is_empty());
    }

    #[test]
    fn validity_checks() {
        assert!(is_valid_set(&[c(Hearts, Two), c(Spades, Two), c(Clubs, Two)]));
        assert!(!is_valid_set(&[c(Hearts, Two), c(Spades, Two)]));
        assert!(!is_valid_set(&[c(Hearts, Two), c(Hearts, Two), c(Clubs, Two)]));
        assert!(is_valid_run(&[c(Hearts, Ace), c(Hearts, Two), c(Hearts, Three)]));
        assert!(!is_valid_run(&[c(Hearts, Ace), c(Hearts, Two), c(Clubs, Three)]));
        assert!(!is_valid_run(&[c(Hearts, Queen), c(Hearts, King), c(Hearts, Ace)]));
    }
}
