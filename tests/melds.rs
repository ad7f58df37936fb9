//! Deck and meld analyzer tests.

mod common;

use common::{card, rng};
use ginrs::Rank::{Five, Four, King, Nine, Seven, Six, Three, Two};
use ginrs::Suit::{Clubs, Diamonds, Hearts, Spades};
use ginrs::{
    Action, Card, DECK_SIZE, GameOptions, GameState, MeldKind, build_deck, check_for_gin,
    deadwood, find_melds, shuffle, sort_hand,
};
use proptest::prelude::*;

fn key(card: &Card) -> (usize, usize) {
    (card.suit().index(), card.rank().index())
}

fn hand_strategy() -> impl Strategy<Value = Vec<Card>> {
    proptest::sample::subsequence(build_deck(), 0..=11).prop_shuffle()
}

#[test]
fn build_deck_has_every_card_once() {
    let deck = build_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let mut keys: Vec<_> = deck.iter().map(key).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), DECK_SIZE);

    assert_eq!(deck[0], card(Hearts, ginrs::Rank::Ace));
    assert_eq!(deck[51], card(Spades, King));
}

#[test]
fn shuffle_is_a_permutation_and_leaves_input_alone() {
    let deck = build_deck();
    let shuffled = shuffle(&deck, &mut rng(3));

    assert_eq!(deck, build_deck());
    assert_ne!(shuffled, deck);
    assert_eq!(sort_hand(&shuffled), deck);
}

#[test]
fn shuffle_visits_every_position() {
    let deck = build_deck();
    let mut r = rng(17);
    let mut seen = [[0_u32; DECK_SIZE]; DECK_SIZE];
    let samples = 3000;

    for _ in 0..samples {
        for (position, card) in shuffle(&deck, &mut r).iter().enumerate() {
            seen[key(card).0 * 13 + key(card).1][position] += 1;
        }
    }

    // Expected count per cell is samples / 52, roughly 58.
    for row in &seen {
        assert!(row.iter().all(|&count| count > 15 && count < 120));
        assert_eq!(row.iter().sum::<u32>(), samples);
    }
}

#[test]
fn set_and_run_with_loose_cards() {
    let hand = [
        card(Hearts, Seven),
        card(Diamonds, Seven),
        card(Spades, Seven),
        card(Clubs, Four),
        card(Clubs, Five),
        card(Clubs, Six),
        card(Spades, Two),
        card(Diamonds, Nine),
        card(Hearts, King),
    ];
    let analysis = find_melds(&hand);

    assert_eq!(analysis.melds.len(), 2);
    assert_eq!(analysis.melds[0].kind(), MeldKind::Set);
    assert_eq!(
        analysis.melds[0].cards(),
        [card(Hearts, Seven), card(Diamonds, Seven), card(Spades, Seven)]
    );
    assert_eq!(analysis.melds[1].kind(), MeldKind::Run);
    assert_eq!(
        analysis.melds[1].cards(),
        [card(Clubs, Four), card(Clubs, Five), card(Clubs, Six)]
    );
    assert_eq!(
        analysis.remaining,
        [card(Spades, Two), card(Diamonds, Nine), card(Hearts, King)]
    );
    assert_eq!(analysis.deadwood(), 21);
}

#[test]
fn greedy_run_scan_claims_the_three_of_clubs() {
    // 3♣ is not in a set, so the club scan starts there and runs to 6♣.
    let hand = [
        card(Hearts, Seven),
        card(Diamonds, Seven),
        card(Spades, Seven),
        card(Clubs, Four),
        card(Clubs, Five),
        card(Clubs, Six),
        card(Spades, Two),
        card(Diamonds, Nine),
        card(Hearts, King),
        card(Clubs, Three),
    ];
    let analysis = find_melds(&hand);

    assert_eq!(
        analysis.melds[1].cards(),
        [
            card(Clubs, Three),
            card(Clubs, Four),
            card(Clubs, Five),
            card(Clubs, Six)
        ]
    );
    assert_eq!(
        analysis.remaining,
        [card(Spades, Two), card(Diamonds, Nine), card(Hearts, King)]
    );
    assert_eq!(deadwood(&hand), 21);
    assert!(!check_for_gin(&hand));
}

#[test]
fn three_melds_covering_the_hand_is_gin() {
    let hand = [
        card(Hearts, Two),
        card(Hearts, Three),
        card(Hearts, Four),
        card(Spades, Nine),
        card(Clubs, Nine),
        card(Diamonds, Nine),
        card(Diamonds, Three),
        card(Diamonds, Four),
        card(Diamonds, Five),
        card(Diamonds, Six),
    ];

    assert_eq!(find_melds(&hand).melds.len(), 3);
    assert_eq!(deadwood(&hand), 0);
    assert!(check_for_gin(&hand));
}

proptest! {
    #[test]
    fn melds_partition_the_hand(hand in hand_strategy()) {
        let analysis = find_melds(&hand);

        let mut out: Vec<Card> = analysis
            .melds
            .iter()
            .flat_map(|meld| meld.cards().iter().copied())
            .chain(analysis.remaining.iter().copied())
            .collect();
        out.sort_by_key(key);
        let mut input = hand.clone();
        input.sort_by_key(key);

        prop_assert_eq!(out, input);
    }

    #[test]
    fn every_meld_is_valid(hand in hand_strategy()) {
        for meld in find_melds(&hand).melds {
            prop_assert!(meld.is_valid());
            match meld.kind() {
                MeldKind::Set => prop_assert!((3..=4).contains(&meld.len())),
                MeldKind::Run => prop_assert!(meld.len() >= 3),
            }
        }
    }

    #[test]
    fn deadwood_ignores_card_order(hand in hand_strategy()) {
        let mut reversed = hand.clone();
        reversed.reverse();

        prop_assert_eq!(deadwood(&hand), deadwood(&sort_hand(&hand)));
        prop_assert_eq!(deadwood(&hand), deadwood(&reversed));
    }

    #[test]
    fn remaining_cards_are_rank_ascending(hand in hand_strategy()) {
        let remaining = find_melds(&hand).remaining;
        prop_assert!(remaining.windows(2).all(|w| w[0].rank() <= w[1].rank()));
    }

    #[test]
    fn transitions_keep_every_card_on_the_table(
        seed in any::<u64>(),
        steps in proptest::collection::vec((0_u8..7, any::<prop::sample::Index>()), 0..60),
    ) {
        let mut r = rng(seed);
        let mut state = GameState::new(GameOptions::default(), &mut r);

        for (step, pick) in steps {
            let owner = state.round.turn_owner;
            let hand = state.hand(owner).cards();
            let action = match step {
                0 => Action::DrawFromDeck { seat: owner },
                1 => Action::DrawFromDiscard { seat: owner },
                2 if !hand.is_empty() => Action::Discard { seat: owner, card: *pick.get(hand) },
                3 => Action::EndTurn,
                4 => Action::Knock { seat: owner },
                5 => Action::NextRound,
                _ => Action::DrawFromDeck { seat: owner.other() },
            };
            state = state.apply(action, &mut r);

            let round = &state.round;
            let mut cards: Vec<Card> = round
                .deck
                .iter()
                .chain(&round.discard_pile)
                .chain(round.player_hand.cards())
                .chain(round.opponent_hand.cards())
                .copied()
                .collect();
            cards.sort_by_key(key);
            prop_assert_eq!(cards, build_deck());
        }
    }
}
