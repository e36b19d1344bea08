//! Terminal blackjack demo.
//!
//! A minimal presentation layer for the engine: it drains the step stream
//! one event at a time, pacing card animations with short sleeps, and feeds
//! hit/stand decisions back in. Run with `cargo run --example cli`.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use pontoon::{Card, DealerPlayMode, Game, Outcome, Rules, Seat, StepEvent, Suit};

const DEAL_PACE: Duration = Duration::from_millis(350);

fn main() {
    println!("Blackjack (type 'q' at any prompt to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(Rules::default(), seed);

    loop {
        println!(
            "\nRules: {:?}, dealer stands at {}",
            game.rules().mode(),
            game.rules().stand_threshold()
        );

        if let Err(err) = game.start_round() {
            println!("Deal error: {err}");
            return;
        }
        present_steps(&game);

        while game.controls_enabled() {
            print_table(&game);
            match prompt_line("[h]it / [s]tand / [q]uit: ").as_str() {
                "h" | "hit" => {
                    if let Err(err) = game.player_hit() {
                        println!("Action error: {err}");
                    }
                }
                "s" | "stand" => {
                    if let Err(err) = game.player_stand() {
                        println!("Action error: {err}");
                    }
                }
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            }
            present_steps(&game);
        }

        print_table(&game);

        match prompt_line("Play again? ([y]es / [r]ules change / [n]o): ").as_str() {
            "y" | "yes" => {}
            "r" | "rules" => {
                if let Some(rules) = prompt_rules() {
                    if let Err(err) = game.configure_rules(rules) {
                        println!("Rules error: {err}");
                    }
                }
            }
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
}

/// Drains the step queue, acknowledging one event at a time.
fn present_steps(game: &Game) {
    while let Some(step) = game.acknowledge_step() {
        match step {
            StepEvent::CardDealt { seat, card, face_up } => {
                let shown = if face_up {
                    format_card(&card)
                } else {
                    "??".to_string()
                };
                println!("  {} receives {shown}", seat_name(seat));
                thread::sleep(DEAL_PACE);
            }
            StepEvent::CardRevealed { seat, card } => {
                println!("  {} reveals {}", seat_name(seat), format_card(&card));
                thread::sleep(DEAL_PACE);
            }
            StepEvent::DealerStood => println!("  Dealer: STAND!"),
            StepEvent::ControlsEnabled(_) => {}
            StepEvent::RoundResolved {
                outcome,
                player_score,
                dealer_score,
            } => {
                println!("\n{}", outcome_message(outcome));
                println!("Your: {player_score} | Dealer: {dealer_score}");
            }
        }
    }
}

fn print_table(game: &Game) {
    let dealer = game.dealer_hand();
    let dealer_cards: Vec<String> = dealer
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if dealer.is_face_up(index) {
                format_card(card)
            } else {
                "??".to_string()
            }
        })
        .collect();
    println!("\nDealer: {} (showing {})", dealer_cards.join(" "), dealer.visible_score());

    let player = game.player_hand();
    let player_cards: Vec<String> = player.cards().iter().map(format_card).collect();
    println!("You:    {} (value {})\n", player_cards.join(" "), player.score());
}

fn prompt_rules() -> Option<Rules> {
    let mode = loop {
        match prompt_line("Dealer mode ([1] auto-start / [2] with player / [3] auto-end): ")
            .as_str()
        {
            "1" => break DealerPlayMode::AutoStart,
            "2" => break DealerPlayMode::WithPlayer,
            "3" => break DealerPlayMode::AutoEnd,
            "q" | "quit" => return None,
            _ => println!("Please pick 1, 2 or 3."),
        }
    };

    loop {
        let input = prompt_line("Stand threshold (12-21): ");
        if input == "q" || input == "quit" {
            return None;
        }
        let Ok(threshold) = input.parse::<u8>() else {
            println!("Please enter a number.");
            continue;
        };
        match Rules::new(mode, threshold) {
            Ok(rules) => return Some(rules),
            Err(err) => println!("{err}"),
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

const fn seat_name(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "You",
        Seat::Dealer => "Dealer",
    }
}

const fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWin => "You win!",
        Outcome::DealerBust => "You win! (dealer bust)",
        Outcome::DealerWin => "You lose!",
        Outcome::PlayerBust => "You lose! (bust)",
        Outcome::Push => "It's a tie!",
        Outcome::BothBust => "It's a draw! (both bust)",
    }
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    format!("{rank}\u{1b}[{color_code}m{suit}\u{1b}[0m")
}
