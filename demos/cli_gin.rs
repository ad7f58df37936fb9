//! CLI gin rummy example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use ginrs::{
    ActionError, Card, Game, GameOptions, GameStatus, Hand, MeldKind, MinDeadwood, RoundEnd,
    RoundResult, Seat, Suit, TurnPhase,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .init();

    println!("Gin rummy CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);
    let mut opponent = MinDeadwood;

    loop {
        match game.status() {
            GameStatus::Finished => {
                print_scores(&game);
                match prompt_line("Game over. Play again? (y/n): ").as_str() {
                    "y" | "yes" => {
                        game.restart();
                        continue;
                    }
                    _ => return,
                }
            }
            GameStatus::RoundOver => {
                print_scores(&game);
                if prompt_line("Press enter for the next round ('q' to quit): ") == "q" {
                    return;
                }
                if let Err(err) = game.next_round() {
                    println!("Next round error: {err}");
                }
                continue;
            }
            GameStatus::Playing => {}
        }

        let state = game.state();
        if state.round.turn_owner == Seat::Opponent {
            let before = game.top_discard();
            if let Err(err) = game.play_opponent_turn(&mut opponent) {
                println!("Opponent error: {err}");
            }
            report_opponent(&game, before);
            continue;
        }

        print_table(&game);

        let result = match state.round.phase {
            TurnPhase::Draw => match prompt_line("[d]eck or [p]ile: ").as_str() {
                "d" | "deck" => match game.draw_from_deck(Seat::Player) {
                    Ok(card) => {
                        println!("You drew {}", format_card(&card));
                        Ok(())
                    }
                    Err(ActionError::DeckExhausted) => {
                        println!("The deck is empty. The round ends.");
                        game.resolve_exhausted_deck().map(|_| ())
                    }
                    Err(err) => Err(err),
                },
                "p" | "pile" => game.draw_from_discard(Seat::Player).map(|card| {
                    println!("You took {}", format_card(&card));
                }),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            },
            TurnPhase::Discard if state.has_discarded() => {
                let knock = if state.can_knock(Seat::Player) {
                    colorize("[k]nock", "32")
                } else {
                    colorize("[k]nock", "90")
                };
                match prompt_line(&format!("[e]nd turn or {knock}: ")).as_str() {
                    "e" | "end" => game.end_turn(),
                    "k" | "knock" => game.knock(Seat::Player).map(|_| ()),
                    "q" | "quit" => return,
                    _ => {
                        println!("Unknown action.");
                        continue;
                    }
                }
            }
            TurnPhase::Discard => {
                let Some(index) = prompt_index("Discard which card (1-11): ") else {
                    return;
                };
                match game.hand(Seat::Player).cards().get(index.wrapping_sub(1)) {
                    Some(&card) => game.discard(Seat::Player, card),
                    None => {
                        println!("No such card.");
                        continue;
                    }
                }
            }
        };

        if let Err(err) = result {
            println!("Action error: {err}");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_index(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    let state = game.state();
    println!(
        "\nDeck: {} cards | Discard: {}",
        game.cards_remaining(),
        game.top_discard()
            .map_or_else(|| "(empty)".to_string(), |card| format_card(&card))
    );

    let hand = game.hand(Seat::Player);
    println!("Hand: {}", format_numbered(&hand));

    let analysis = hand.melds();
    for meld in &analysis.melds {
        let kind = match meld.kind() {
            MeldKind::Set => "set",
            MeldKind::Run => "run",
        };
        println!("  {kind}: {}", format_cards(meld.cards()));
    }
    println!(
        "  deadwood: {} ({})",
        format_cards(&analysis.remaining),
        analysis.deadwood()
    );
    println!(
        "Opponent holds {} cards\n",
        state.hand(Seat::Opponent).len()
    );
}

fn print_scores(game: &Game) {
    let state = game.state();
    if let Some(result) = state.last_result {
        println!("\n{}", describe_result(&result));
        println!(
            "Opponent hand: {}",
            format_cards(state.hand(Seat::Opponent).cards())
        );
    }
    println!(
        "Score: you {} | opponent {} (target {})",
        state.player_score, state.opponent_score, state.options.target_score
    );
    if let Some(winner) = state.game_winner {
        println!("{} won the game.", seat_name(winner));
    }
}

fn report_opponent(game: &Game, before: Option<Card>) {
    if game.status() != GameStatus::Playing {
        return;
    }
    if let Some(card) = game.top_discard() {
        let took = if before == Some(card) { "" } else { " after drawing" };
        println!("Opponent discarded {}{took}", format_card(&card));
    }
}

fn describe_result(result: &RoundResult) -> String {
    let how = match result.kind {
        RoundEnd::Gin | RoundEnd::OpponentGin => "went gin",
        RoundEnd::Knock => "knocked",
        RoundEnd::Undercut => "knocked and was undercut",
    };
    let forced = if result.forced { " (deck ran out)" } else { "" };
    format!(
        "{} {how}{forced}: {} vs {} deadwood, {} scores {}",
        seat_name(result.knocker),
        result.knocker_deadwood,
        result.defender_deadwood,
        seat_name(result.scorer),
        result.points
    )
}

const fn seat_name(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "You",
        Seat::Opponent => "Opponent",
    }
}

fn format_numbered(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{}:{}", index + 1, format_card(card)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
