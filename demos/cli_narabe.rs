//! CLI speed-solitaire example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use narabe::{Card, Game, GameMode, GameOptions, GameState, Snapshot};

/// Fixed keyboard mapping for the five hand slots.
const SLOT_KEYS: [char; 5] = ['d', 'f', 'j', 'k', 'l'];

fn main() {
    println!("Speed solitaire (slot keys: d f j k l, 'e' toggles easy mode, 'q' quits)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        let snapshot = game.snapshot();
        print_table(&snapshot);

        match snapshot.state {
            GameState::Playing => {}
            GameState::Won => {
                println!("You win! All {} cards played.", snapshot.played_count);
                if !prompt_retry() {
                    break;
                }
                game.reset();
                continue;
            }
            GameState::Lost => {
                println!("Game over. Cards played: {}", snapshot.played_count);
                if !prompt_retry() {
                    break;
                }
                game.reset();
                continue;
            }
        }

        let input = prompt_line("Play: ");
        match input.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "e" | "easy" => {
                let mode = match game.options().mode {
                    GameMode::Normal => GameMode::Easy,
                    GameMode::Easy => GameMode::Normal,
                };
                game.set_mode(mode);
                println!("Mode switched to {mode:?}; new deal.");
            }
            other => {
                let Some(key) = other.chars().next().filter(|_| other.len() == 1) else {
                    println!("Unknown input.");
                    continue;
                };
                let Some(slot) = SLOT_KEYS.iter().position(|&k| k == key) else {
                    println!("Unknown input.");
                    continue;
                };
                let Some(card) = snapshot.hand.get(slot) else {
                    println!("That slot is empty.");
                    continue;
                };
                if !game.play_card(card.id).is_played() {
                    println!("{} cannot be played.", format_card(*card));
                }
            }
        }
    }
}

fn print_table(snapshot: &Snapshot) {
    println!();
    match snapshot.pile_top {
        Some(top) => println!(
            "Pile: {}  (played {}, deck {})",
            format_card(top),
            snapshot.played_count,
            snapshot.cards_remaining
        ),
        None => println!("Pile: empty  (deck {})", snapshot.cards_remaining),
    }

    let mut line = String::from("Hand:");
    for (slot, card) in snapshot.hand.iter().enumerate() {
        let marker = if snapshot.playable.contains(&card.id) {
            '*'
        } else {
            ' '
        };
        line.push_str(&format!(
            "  [{}]{}{}",
            SLOT_KEYS[slot],
            marker,
            format_card(*card)
        ));
    }
    println!("{line}");
}

fn format_card(card: Card) -> String {
    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        n => n.to_string(),
    };
    format!("{}{rank}", card.suit.symbol())
}

fn prompt_retry() -> bool {
    loop {
        match prompt_line("Retry? (r to retry, q to quit): ").as_str() {
            "r" | "retry" => return true,
            "q" | "quit" => return false,
            _ => {}
        }
    }
}

fn prompt_line(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}
