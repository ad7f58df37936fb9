//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use ginrs::{
    Card, GameOptions, GameState, Hand, Rank, RoundState, Seat, Suit, TurnPhase, build_deck,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Installs a test subscriber once. The filter comes from `TEST_LOG`, then
/// `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Builds a playing state with the given hands, the player to draw, and
/// `draws` as the next cards off the deck (first element drawn first).
///
/// Every other card is in the deck except one, which starts the discard
/// pile.
pub fn table(player: &[Card], opponent: &[Card], draws: &[Card]) -> GameState {
    table_with(GameOptions::default(), player, opponent, draws)
}

pub fn table_with(
    options: GameOptions,
    player: &[Card],
    opponent: &[Card],
    draws: &[Card],
) -> GameState {
    let mut state = GameState::new(options, &mut rng(7));

    let used: Vec<Card> = player
        .iter()
        .chain(opponent)
        .chain(draws)
        .copied()
        .collect();
    let mut deck: Vec<Card> = build_deck()
        .into_iter()
        .filter(|c| !used.contains(c))
        .collect();
    let discard = deck.remove(0);
    deck.extend(draws.iter().rev());

    state.round = RoundState {
        deck,
        player_hand: Hand::from_cards(player.to_vec()),
        opponent_hand: Hand::from_cards(opponent.to_vec()),
        discard_pile: vec![discard],
        turn_owner: Seat::Player,
        phase: TurnPhase::Draw,
    };
    state
}

/// Asserts that deck, hands and discard pile hold each card exactly once.
pub fn assert_full_table(state: &GameState) {
    let round = &state.round;
    let mut cards: Vec<Card> = round
        .deck
        .iter()
        .chain(&round.discard_pile)
        .chain(round.player_hand.cards())
        .chain(round.opponent_hand.cards())
        .copied()
        .collect();
    cards.sort_by_key(|c| (c.suit().index(), c.rank().index()));

    assert_eq!(cards, build_deck());
}

/// Player hand with three melds and 5♥ as deadwood (5 points).
pub fn player_five() -> Vec<Card> {
    use Rank::*;
    use Suit::*;
    vec![
        card(Hearts, Ace),
        card(Hearts, Two),
        card(Hearts, Three),
        card(Hearts, Five),
        card(Spades, Four),
        card(Diamonds, Four),
        card(Clubs, Four),
        card(Clubs, Eight),
        card(Clubs, Nine),
        card(Clubs, Ten),
    ]
}

/// Player hand with 8♥ as deadwood (8 points).
pub fn player_eight() -> Vec<Card> {
    let mut hand = player_five();
    hand[3] = card(Suit::Hearts, Rank::Eight);
    hand
}

/// Player hand with no deadwood.
pub fn player_gin() -> Vec<Card> {
    let mut hand = player_five();
    hand[3] = card(Suit::Clubs, Rank::Jack);
    hand
}

/// Opponent hand with K♥, 6♦ and 2♣ as deadwood (18 points).
pub fn opponent_eighteen() -> Vec<Card> {
    use Rank::*;
    use Suit::*;
    vec![
        card(Hearts, Seven),
        card(Diamonds, Seven),
        card(Spades, Seven),
        card(Clubs, Seven),
        card(Spades, Jack),
        card(Spades, Queen),
        card(Spades, King),
        card(Hearts, King),
        card(Diamonds, Six),
        card(Clubs, Two),
    ]
}

/// Opponent hand with A♣, A♦ and 3♠ as deadwood (5 points).
pub fn opponent_five() -> Vec<Card> {
    use Rank::*;
    use Suit::*;
    let mut hand = opponent_eighteen();
    hand[7] = card(Clubs, Ace);
    hand[8] = card(Diamonds, Ace);
    hand[9] = card(Spades, Three);
    hand
}
