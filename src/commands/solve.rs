//! Code solving command
//!
//! Lets the solver crack a known secret and records how the pool shrinks.

use crate::core::{CODE_SPACE, Code, Feedback};
use crate::solver::CandidatePool;
use rand::Rng;

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_turns: CODE_SPACE,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Code,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub code: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific secret with truthful feedback
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not four digits
/// - The solver runs out of candidates (cannot happen with truthful feedback)
pub fn solve_code<R: Rng + ?Sized>(config: &SolveConfig, rng: &mut R) -> Result<SolveResult, String> {
    let secret = Code::parse(&config.secret).map_err(|e| format!("Invalid secret: {e}"))?;

    let mut pool = CandidatePool::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_turns {
        let candidates_before = pool.len();
        let code = pool.pick_guess(rng).map_err(|e| e.to_string())?;
        let feedback = Feedback::score(secret, code);

        if !feedback.is_perfect() {
            pool.apply_feedback(code, feedback);
        }

        guesses.push(GuessStep {
            code,
            feedback,
            candidates_before,
            candidates_after: if feedback.is_perfect() { 1 } else { pool.len() },
        });

        if feedback.is_perfect() {
            return Ok(SolveResult {
                success: true,
                guesses,
                secret,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        secret,
    })
}

/// Count the turns the solver needs for `secret`
///
/// Returns `None` if the pool runs dry, which truthful scoring never causes.
pub fn turns_to_solve<R: Rng + ?Sized>(secret: Code, rng: &mut R) -> Option<usize> {
    let mut pool = CandidatePool::new();
    let mut turns = 0;

    loop {
        turns += 1;
        let guess = pool.pick_guess(rng).ok()?;
        let feedback = Feedback::score(secret, guess);
        if feedback.is_perfect() {
            return Some(turns);
        }
        pool.apply_feedback(guess, feedback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn solve_code_succeeds() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = solve_code(&SolveConfig::new("4321".to_string()), &mut rng).unwrap();

        assert!(result.success);
        assert_eq!(result.secret.to_string(), "4321");
        let last = result.guesses.last().unwrap();
        assert_eq!(last.code, result.secret);
        assert!(last.feedback.is_perfect());
    }

    #[test]
    fn solve_records_shrinking_pool() {
        let mut rng = StdRng::seed_from_u64(2);
        let result = solve_code(&SolveConfig::new("0007".to_string()), &mut rng).unwrap();

        assert_eq!(result.guesses[0].candidates_before, CODE_SPACE);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
        for pair in result.guesses.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(solve_code(&SolveConfig::new("12a3".to_string()), &mut rng).is_err());
        assert!(solve_code(&SolveConfig::new("123".to_string()), &mut rng).is_err());
    }

    #[test]
    fn solve_with_turn_limit() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut config = SolveConfig::new("9876".to_string());
        config.max_turns = 1;

        let result = solve_code(&config, &mut rng).unwrap();
        assert_eq!(result.guesses.len(), 1);
        if !result.success {
            assert!(!result.guesses[0].feedback.is_perfect());
        }
    }

    #[test]
    fn turns_to_solve_finds_every_probe() {
        let mut rng = StdRng::seed_from_u64(5);
        for secret in ["0000", "1123", "9999", "5050"] {
            let turns = turns_to_solve(Code::parse(secret).unwrap(), &mut rng);
            assert!(matches!(turns, Some(n) if (1..=CODE_SPACE).contains(&n)));
        }
    }
}
