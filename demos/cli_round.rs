//! CLI guessing round example.
//!
//! Run with `RUST_LOG=guessword=debug` to see the engine's events.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use guessword::{BuzzPattern, HapticActuator, RoundController, RoundOptions, ScoreReview, Ticker};
use tracing_subscriber::EnvFilter;

/// Prints vibration patterns instead of playing them.
struct TerminalBuzzer;

impl HapticActuator for TerminalBuzzer {
    fn vibrate(&mut self, pattern: BuzzPattern) {
        let label = match pattern {
            BuzzPattern::RepeatingShort => "bzz bzz bzz",
            BuzzPattern::SingleLong => "bzzzzzzzzz",
            BuzzPattern::SingleShort => "bz",
            BuzzPattern::Silent => return,
        };
        println!("{}", colorize(label, "33"));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Guess the word (c = correct, s = skip, q = quit)");

    let simple = std::env::args().any(|arg| arg == "--simple");
    let options = if simple {
        RoundOptions::simple()
    } else {
        RoundOptions::classic()
    };

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut buzzer = TerminalBuzzer;

    loop {
        let round = match RoundController::new(options, seed) {
            Ok(round) => Arc::new(round),
            Err(err) => {
                println!("Options error: {err}");
                return;
            }
        };
        let mut ticker = Ticker::spawn(Arc::clone(&round));

        let review = play(&round, &mut buzzer);
        ticker.stop();
        round.dispose();
        let Some(review) = review else {
            return;
        };

        println!("\nFinal score: {}", colorize(&review.score().to_string(), "32"));
        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => review.request_new_round(),
            _ => {
                println!("Goodbye.");
                return;
            }
        }

        if review.new_round_requested() {
            review.acknowledge_new_round_handled();
            seed = seed.wrapping_add(1);
        }
    }
}

/// Runs one round until it ends. Returns `None` if the player quit.
fn play(round: &RoundController, buzzer: &mut TerminalBuzzer) -> Option<ScoreReview> {
    loop {
        round.deliver_alert(buzzer);

        if round.round_finished() {
            round.acknowledge_round_finished();
            println!("{}", colorize("Time's up!", "31"));
            return round.review();
        }

        let snapshot = round.snapshot();
        println!(
            "\n[{}] score {} | word: {}",
            snapshot.time_display,
            snapshot.score,
            colorize(snapshot.current_word, "36")
        );

        let input = prompt_line("> ");
        if round.is_over() {
            // The countdown ran out while waiting for input.
            continue;
        }

        match input.as_str() {
            "c" | "correct" => {
                round.mark_correct();
            }
            "s" | "skip" => {
                round.mark_skip();
            }
            "q" | "quit" => return None,
            _ => println!("Unknown action."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
