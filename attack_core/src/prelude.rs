//! Prelude module for convenient imports
//!
//! ```rust
//! use attack_core::prelude::*;
//! ```

// Core types
pub use crate::types::{AttackOutcome, Outcome, Target};

// Simulation
pub use crate::combat::{Attack, Sample, DEFAULT_SAMPLE_SIZE};

// Statistics
pub use crate::stats::{Histogram, Summary};

// Config
pub use crate::config::ScenarioConfig;

// Re-exports from dice_core
pub use dice_core::{Die, Roll};
