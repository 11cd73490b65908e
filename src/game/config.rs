//! Session configuration

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

/// Settings shared by the interactive front ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Pause before the opening guess is shown
    pub first_reveal_delay: Duration,
    /// Pause before each later guess is shown
    pub reveal_delay: Duration,
    /// Fixed seed for a reproducible game
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Use the same delay for every reveal
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.first_reveal_delay = delay;
        self.reveal_delay = delay;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Random source for a session: seeded if configured, otherwise from the OS
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_reveal_delay: Duration::from_millis(800),
            reveal_delay: Duration::from_millis(600),
            seed: None,
        }
    }
}
