//! Guess selection for the automated player
//!
//! The solver keeps every code still consistent with the feedback it has
//! received and guesses uniformly among the ones it has not tried yet.

mod pool;

pub use pool::{CandidatePool, PoolError};
