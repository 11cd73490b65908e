//! Benchmark command
//!
//! Plays the solver against many random secrets and summarizes the turns it
//! needed.

use super::solve::turns_to_solve;
use crate::core::{CODE_SPACE, Code};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub games: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub fn new(games: usize, seed: Option<u64>) -> Self {
        Self {
            games,
            seed: seed.unwrap_or_else(|| rand::rng().random()),
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
    pub seed: u64,
}

/// Run `config.games` self-play games in parallel
///
/// Game `i` uses a secret and solver both drawn from `StdRng` seeded with
/// `seed + i`, so a run is reproducible regardless of thread scheduling.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
#[must_use]
pub fn run_benchmark(config: &BenchmarkConfig) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb.set_message("playing");
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<Option<usize>> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let secret = Code::from_index(rng.random_range(0..CODE_SPACE as u16));
            let turns = turns_to_solve(secret, &mut rng);
            pb.inc(1);
            turns
        })
        .collect();

    pb.finish_with_message("done");

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;

    for turns in outcomes.iter().flatten().copied() {
        total_turns += turns;
        min_turns = min_turns.min(turns);
        max_turns = max_turns.max(turns);
        *distribution.entry(turns).or_insert(0) += 1;
    }

    let solved: usize = distribution.values().sum();
    let duration = start.elapsed();

    BenchmarkResult {
        total_games: config.games,
        solved,
        total_turns,
        average_turns: if solved == 0 {
            0.0
        } else {
            total_turns as f64 / solved as f64
        },
        min_turns: if solved == 0 { 0 } else { min_turns },
        max_turns,
        distribution,
        duration,
        games_per_second: config.games as f64 / duration.as_secs_f64().max(f64::EPSILON),
        seed: config.seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(games: usize, seed: u64) -> BenchmarkConfig {
        BenchmarkConfig {
            games,
            seed,
            show_progress: false,
        }
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&quiet(8, 10));

        assert_eq!(result.total_games, 8);
        assert_eq!(result.solved, 8);
        assert!(result.average_turns >= 1.0);
        assert!(result.min_turns >= 1);
        assert!(result.max_turns < CODE_SPACE);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(&quiet(10, 20));

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_games);

        let weighted: usize = result.distribution.iter().map(|(t, n)| t * n).sum();
        assert_eq!(weighted, result.total_turns);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let a = run_benchmark(&quiet(6, 77));
        let b = run_benchmark(&quiet(6, 77));
        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.seed, 77);
    }

    #[test]
    fn benchmark_empty_run() {
        let result = run_benchmark(&quiet(0, 1));

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_turns, 0);
        assert_eq!(result.min_turns, 0);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let result = run_benchmark(&quiet(10, 5));

        assert!(result.average_turns >= result.min_turns as f64);
        assert!(result.average_turns <= result.max_turns as f64);
    }
}
