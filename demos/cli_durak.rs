//! CLI Durak example: play against the bot in a terminal.
//!
//! Set `RUST_LOG=durak=debug` to watch the engine's transitions.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use durak::{Action, GameOptions, GameResult, GameState, Phase, Session, TableSlot};
use tracing_subscriber::EnvFilter;

const HUMAN: &str = "you";
const BOT: &str = "bot";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    println!("Durak CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = Session::new(HUMAN, BOT, GameOptions::default(), seed);
    let mut games = 1;

    loop {
        // The bot may have the first move after a restart or a lost exchange.
        session.run_bot();

        let state = session.state();
        if state.is_finished() {
            print_table(state);
            print_result(state);
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    session.restart(seed.wrapping_add(games));
                    games += 1;
                    continue;
                }
                _ => break,
            }
        }

        print_table(state);
        println!("{}", format_actions(state));

        let input = prompt_line("Action: ");
        let mut words = input.split_whitespace();
        let action = match words.next() {
            Some("a" | "attack") => parse_index(words.next())
                .and_then(|i| state.players[0].hand.cards().get(i).copied())
                .map(|card| Action::Attack { card }),
            Some("d" | "defend") => {
                let slot = parse_index(words.next());
                let card = parse_index(words.next())
                    .and_then(|i| state.players[0].hand.cards().get(i).copied());
                slot.zip(card).map(|(attack_index, card)| Action::Defend {
                    attack_index,
                    card,
                })
            }
            Some("t" | "take") => Some(Action::Take),
            Some("x" | "done") => Some(Action::Done),
            Some("s" | "surrender") => {
                if let Err(err) = session.concede(HUMAN) {
                    println!("Surrender error: {err}");
                }
                continue;
            }
            Some("q" | "quit") => return,
            _ => None,
        };

        let Some(action) = action else {
            println!("Unknown action.");
            continue;
        };

        match session.play(HUMAN, &action) {
            Ok(steps) if steps > 0 => println!("{}", session.state().message),
            Ok(_) => {}
            Err(err) => println!("Action error: {err}"),
        }
    }
}

fn parse_index(word: Option<&str>) -> Option<usize> {
    word.and_then(|w| w.parse().ok())
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

fn print_table(state: &GameState) {
    println!(
        "\nTrump: {} | Deck: {} cards | Bot holds {} cards",
        state.trump_card,
        state.deck.len(),
        state.players[1].hand.len()
    );
    println!("{}", state.message);

    if state.table.is_empty() {
        println!("Table: empty");
    } else {
        for (index, slot) in state.table.iter().enumerate() {
            println!("Table {index}: {}", format_slot(slot));
        }
    }

    let role = if state.attacker_player().id == HUMAN {
        "attacking"
    } else {
        "defending"
    };
    let hand: Vec<String> = state.players[0]
        .hand
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{index}:{card}"))
        .collect();
    println!("Your hand ({role}): {}\n", hand.join(" "));
}

fn format_slot(slot: &TableSlot) -> String {
    match slot.defense {
        Some(defense) => format!("{} / {}", slot.attack, colorize(&defense.to_string(), "32")),
        None => format!("{} / {}", slot.attack, colorize("open", "31")),
    }
}

fn format_actions(state: &GameState) -> String {
    let attacking = state.attacker == 0;
    let parts = [
        format_action(
            "attack <card>",
            "a",
            attacking && !state.legal_attacks(0).is_empty(),
        ),
        format_action(
            "defend <slot> <card>",
            "d",
            !attacking && state.phase == Phase::Defend,
        ),
        format_action("take", "t", !attacking && state.phase == Phase::Defend),
        format_action(
            "done",
            "x",
            attacking && matches!(state.phase, Phase::Attack | Phase::Throw) && !state.table.is_empty(),
        ),
        format_action("surrender", "s", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn print_result(state: &GameState) {
    match state.result() {
        Some(GameResult::Winner { id }) if id == HUMAN => println!("You win!"),
        Some(GameResult::Winner { .. }) => println!("You are the fool."),
        Some(GameResult::Draw) => println!("Draw."),
        None => {}
    }
}
