//! Bulls and Cows - CLI
//!
//! Chat game against a candidate-elimination solver, with TUI and CLI modes.

use anyhow::Result;
use bulls_and_cows::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, run_simple, solve_code},
    game::GameConfig,
    output::{print_benchmark_result, print_solve_result},
};
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "bulls_and_cows",
    about = "Bulls and Cows: guess each other's 4-digit code against a solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed the random source for a reproducible game
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Pause before each system guess is shown, in milliseconds
    #[arg(short, long, global = true)]
    delay_ms: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based chat without TUI)
    Simple,

    /// Watch the solver crack a specific code
    Solve {
        /// The secret code, four digits
        code: String,

        /// Show candidate counts after each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Measure how many guesses the solver needs
    Benchmark {
        /// Number of random secrets to play against
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::default().with_seed(cli.seed);
    if let Some(ms) = cli.delay_ms {
        config = config.with_delay(Duration::from_millis(ms));
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple(&config).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { code, verbose } => run_solve_command(&config, code, verbose),
        Commands::Benchmark { count } => {
            run_benchmark_command(count, cli.seed);
            Ok(())
        }
    }
}

fn run_solve_command(config: &GameConfig, code: String, verbose: bool) -> Result<()> {
    let solve_config = SolveConfig::new(code);
    let mut rng = config.rng();
    let result = solve_code(&solve_config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(count: usize, seed: Option<u64>) {
    println!("Running benchmark on {count} random secrets...");

    let config = BenchmarkConfig::new(count, seed);
    let result = run_benchmark(&config);
    print_benchmark_result(&result);
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use bulls_and_cows::interactive::{App, run_tui};

    let app = App::new(config);
    run_tui(app)
}
