//! Combat - Attack resolution and repeated sampling

mod attack;
mod sample;

pub use attack::{Attack, DEFAULT_SAMPLE_SIZE};
pub use sample::Sample;

use thiserror::Error;

/// Error running a simulation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("Sample size must be at least 1")]
    EmptySample,
    #[error("Sample sequences differ in length: {rolls} rolls, {results} results, {damage} damage")]
    MismatchedSample {
        rolls: usize,
        results: usize,
        damage: usize,
    },
}
