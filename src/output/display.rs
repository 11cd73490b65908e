//! Display functions for command results and session events

use super::formatters::{elimination_bar, feedback_to_pegs};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::CODE_SPACE;
use crate::game::Event;
use colored::Colorize;

/// Print one session event as a chat line
pub fn print_event(event: &Event) {
    match event {
        Event::Thinking => println!("{}", "  System is thinking...".bright_black().italic()),
        Event::SystemGuessed(code) => {
            println!(
                "{} I guess: {}",
                "🤖".bright_cyan(),
                code.to_string().bright_yellow().bold()
            );
            println!(
                "{}",
                "   Tell me how close I am (e.g. '2 1' = 2 exact, 1 misplaced, or 'win')"
                    .bright_black()
            );
        }
        Event::FeedbackApplied {
            guess,
            feedback,
            remaining,
        } => {
            println!(
                "   {} {} → {} candidates left",
                guess,
                feedback_to_pegs(*feedback),
                remaining.to_string().cyan()
            );
            if *remaining == 0 {
                println!(
                    "{}",
                    "   ⚠ That feedback contradicts your earlier answers.".yellow()
                );
            }
        }
        Event::PromptPlayerTurn => {
            println!(
                "{} Ok, now it's your turn. Type a guess at my secret.",
                "🤖".bright_cyan()
            );
        }
        Event::GuessScored { guess, feedback } => {
            if !feedback.is_perfect() {
                println!(
                    "{} Nope, {} {} ({}). My turn to guess now.",
                    "🤖".bright_cyan(),
                    guess,
                    feedback_to_pegs(*feedback),
                    feedback.to_string().bold()
                );
            }
        }
        Event::SystemWon {
            player_secret,
            system_secret,
        } => {
            println!(
                "\n{}",
                format!("🎯 I guessed it! Your secret is {player_secret}. I win.")
                    .bright_green()
                    .bold()
            );
            println!("   My secret was {}.", system_secret.to_string().bold());
        }
        Event::PlayerWon { secret } => {
            println!(
                "\n{}",
                format!("🏆 Correct! You guessed my secret ({secret}). You win!")
                    .bright_green()
                    .bold()
            );
        }
        Event::Stuck => {
            println!(
                "{}",
                "❌ I have no candidates left, the feedback seems inconsistent. Type 'reset'."
                    .red()
                    .bold()
            );
        }
        Event::TurnRejected(reason) => println!("{} {reason}", "✗".red()),
        Event::Reset => println!("{}", "🔄 Game reset.".bright_black()),
    }
}

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.code,
            feedback_to_pegs(step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Eliminated: [{}]",
                elimination_bar(step.candidates_after, CODE_SPACE, 30).green()
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_turns).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    println!("   Seed:             {}", result.seed);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&turns, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {turns:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
