//! attack_core - Attack resolution and Monte Carlo damage statistics
//!
//! This library provides:
//! - Attack: a damage roll and attack bonus aimed at a Target
//! - Outcome: the four degrees of success of a d20 attack
//! - Sample: rolls, outcomes and damage of repeated attacks
//! - Summary / Histogram: statistics derived from a sample
//! - ScenarioConfig: TOML description of one simulation
//!
//! # Quick Start
//!
//! ```rust
//! use attack_core::prelude::*;
//!
//! let attack = Attack::new(Roll::parse("d8+4").unwrap(), 7, Target::with_ac(15));
//! let sample = attack.sample_seeded(1000, 42).unwrap();
//! let summary = sample.summary();
//!
//! assert!(summary.hit_chance >= summary.crit_chance);
//! println!("Expected damage: {:.2}", summary.expected_damage);
//! ```

pub mod combat;
pub mod config;
pub mod prelude;
pub mod stats;
pub mod types;

// Core API - what most users need
pub use combat::{Attack, Sample, SimulationError, DEFAULT_SAMPLE_SIZE};
pub use stats::{Histogram, HistogramBin, Summary};
pub use types::{AttackOutcome, Outcome, Target};

// Configuration
pub use config::{ConfigError, ScenarioConfig};

// Re-export dice types used in the public API
pub use dice_core::{Die, ParseError, Roll};
