//! Simple interactive CLI mode
//!
//! Line-based chat game without TUI

use crate::core::Feedback;
use crate::game::{Command, Event, GameConfig, GameSession, Phase};
use crate::output::print_event;
use colored::Colorize;
use std::io::{self, Write};
use std::thread;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(config: &GameConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Bulls and Cows - Chat Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a 4-digit secret (digits 0-9, repeats allowed). Don't type it!");
    println!("I'll guess yours, you guess mine, and we take turns.\n");
    println!("  - Score my guesses as 'EXACT MISPLACED', e.g. '2 1'");
    println!("  - Type 'win' when I get your secret");
    println!("  - Guess mine by typing four digits\n");
    println!("Commands: 'start', 'reset', 'quit'\n");

    let mut session = GameSession::new(config.rng());

    loop {
        let prompt = match session.phase() {
            Phase::Idle => "Type 'start' to play",
            Phase::AwaitingPlayerFeedback | Phase::SystemThinking => "Feedback",
            Phase::AwaitingPlayerGuess => "Your guess",
            Phase::Stuck => "Type 'reset' to start over",
        };
        let input = get_user_input(prompt)?;

        let command = match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "start" | "s" | "new" | "n" => Command::Start,
            "reset" | "r" => Command::Reset,
            "" => continue,
            text => match session.phase() {
                Phase::AwaitingPlayerFeedback => match text.parse::<Feedback>() {
                    Ok(feedback) => Command::Feedback {
                        exact: feedback.exact(),
                        misplaced: feedback.misplaced(),
                    },
                    Err(err) => {
                        println!("{} {err}", "✗".red());
                        continue;
                    }
                },
                _ => Command::Guess(text.to_string()),
            },
        };

        // A fresh round shows its opening guess after the longer pause
        let is_opening = matches!(command, Command::Start);
        for event in session.dispatch(command) {
            if event == Event::Thinking {
                print_event(&event);
                let delay = if is_opening {
                    config.first_reveal_delay
                } else {
                    config.reveal_delay
                };
                thread::sleep(delay);
                continue;
            }
            print_event(&event);
            if event.is_game_over() && event != Event::Stuck {
                println!("{}", "   Type 'start' to play again.".bright_black());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
