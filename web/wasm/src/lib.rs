use ginrs::{
    Card, Game, GameOptions, GameStatus, MeldKind, MinDeadwood, RoundEnd, RoundResult,
    RoundWinner, Seat, Suit, TurnPhase,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    opponent: MinDeadwood,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
            opponent: MinDeadwood,
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(self.game.options, seed as u64);
    }

    pub fn restart(&self) {
        self.game.restart();
    }

    pub fn draw_from_deck(&self) -> Result<JsValue, JsValue> {
        let card = self.game.draw_from_deck(Seat::Player).map_err(js_err)?;
        to_js_value(&card_to_js(card))
    }

    pub fn draw_from_discard(&self) -> Result<JsValue, JsValue> {
        let card = self.game.draw_from_discard(Seat::Player).map_err(js_err)?;
        to_js_value(&card_to_js(card))
    }

    /// Discards the card at `index` in the player's hand order.
    pub fn discard(&self, index: u32) -> Result<(), JsValue> {
        let hand = self.game.hand(Seat::Player);
        let card = hand
            .cards()
            .get(index as usize)
            .copied()
            .ok_or_else(|| JsValue::from_str("no card at that index"))?;
        self.game.discard(Seat::Player, card).map_err(js_err)
    }

    pub fn end_turn(&self) -> Result<(), JsValue> {
        self.game.end_turn().map_err(js_err)
    }

    pub fn knock(&self) -> Result<JsValue, JsValue> {
        let result = self.game.knock(Seat::Player).map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn opponent_turn(&mut self) -> Result<(), JsValue> {
        self.game
            .play_opponent_turn(&mut self.opponent)
            .map_err(js_err)
    }

    pub fn resolve_exhausted_deck(&self) -> Result<JsValue, JsValue> {
        let result = self.game.resolve_exhausted_deck().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn next_round(&self) -> Result<(), JsValue> {
        self.game.next_round().map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.game.state();
        let round = &state.round;
        let analysis = state.melds(Seat::Player);
        let round_over = state.status != GameStatus::Playing;

        let snapshot = Snapshot {
            status: status_to_str(state.status),
            turn: seat_to_str(round.turn_owner),
            phase: phase_to_str(round.phase),
            player_hand: round.player_hand.cards().iter().copied().map(card_to_js).collect(),
            opponent_hand: round_over.then(|| {
                round.opponent_hand.cards().iter().copied().map(card_to_js).collect()
            }),
            opponent_cards: round.opponent_hand.len() as u32,
            melds: analysis
                .melds
                .iter()
                .map(|meld| JsMeld {
                    kind: match meld.kind() {
                        MeldKind::Set => "Set",
                        MeldKind::Run => "Run",
                    },
                    cards: meld.cards().iter().copied().map(card_to_js).collect(),
                })
                .collect(),
            deadwood: analysis.deadwood(),
            can_knock: state.can_knock(Seat::Player),
            top_discard: round.top_discard().map(card_to_js),
            cards_remaining: round.cards_remaining() as u32,
            player_score: state.player_score,
            opponent_score: state.opponent_score,
            round_winner: state.round_winner.map(|winner| match winner {
                RoundWinner::Seat(seat) => seat_to_str(seat),
                RoundWinner::Draw => "Draw",
            }),
            game_winner: state.game_winner.map(seat_to_str),
            last_result: state.last_result.map(JsRoundResult::from),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    status: &'static str,
    turn: &'static str,
    phase: &'static str,
    player_hand: Vec<JsCard>,
    opponent_hand: Option<Vec<JsCard>>,
    opponent_cards: u32,
    melds: Vec<JsMeld>,
    deadwood: u32,
    can_knock: bool,
    top_discard: Option<JsCard>,
    cards_remaining: u32,
    player_score: u32,
    opponent_score: u32,
    round_winner: Option<&'static str>,
    game_winner: Option<&'static str>,
    last_result: Option<JsRoundResult>,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    value: u32,
}

#[derive(Serialize)]
struct JsMeld {
    kind: &'static str,
    cards: Vec<JsCard>,
}

#[derive(Serialize)]
struct JsRoundResult {
    kind: &'static str,
    knocker: &'static str,
    scorer: &'static str,
    points: u32,
    knocker_deadwood: u32,
    defender_deadwood: u32,
    forced: bool,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            kind: match result.kind {
                RoundEnd::Gin => "Gin",
                RoundEnd::Knock => "Knock",
                RoundEnd::Undercut => "Undercut",
                RoundEnd::OpponentGin => "OpponentGin",
            },
            knocker: seat_to_str(result.knocker),
            scorer: seat_to_str(result.scorer),
            points: result.points,
            knocker_deadwood: result.knocker_deadwood,
            defender_deadwood: result.defender_deadwood,
            forced: result.forced,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit()),
        rank: card.rank().label(),
        value: card.value(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn seat_to_str(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "Player",
        Seat::Opponent => "Opponent",
    }
}

fn phase_to_str(phase: TurnPhase) -> &'static str {
    match phase {
        TurnPhase::Draw => "Draw",
        TurnPhase::Discard => "Discard",
    }
}

fn status_to_str(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "Playing",
        GameStatus::RoundOver => "RoundOver",
        GameStatus::Finished => "Finished",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
