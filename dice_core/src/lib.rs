//! dice_core - Polyhedral dice and dice-notation parsing
//!
//! This library provides:
//! - Die: a single die with a fixed face count
//! - Roll: a pool of dice plus a flat modifier
//! - A compact notation parser ("2d8+4", "d6+1d4+2", "5")
//!
//! # Quick Start
//!
//! ```rust
//! use dice_core::Roll;
//!
//! let roll = Roll::parse("2d6+3").unwrap();
//! assert_eq!(roll.dice().len(), 2);
//! assert_eq!(roll.modifier(), 3);
//!
//! let total = roll.roll();
//! assert!((5..=15).contains(&total));
//! ```

mod die;
mod parse;
mod roll;

pub use die::Die;
pub use parse::MAX_DICE;
pub use roll::Roll;

use thiserror::Error;

/// Error parsing dice notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty dice notation")]
    Empty,
    #[error("Empty term in dice notation")]
    EmptyTerm,
    #[error("Invalid modifier: '{0}'")]
    InvalidModifier(String),
    #[error("Invalid dice count in '{0}'")]
    InvalidCount(String),
    #[error("Invalid die faces in '{0}'")]
    InvalidFaces(String),
    #[error("More than one 'd' in term '{0}'")]
    MultipleDice(String),
    #[error("Too many dice in '{term}' (limit is {limit})")]
    TooManyDice { term: String, limit: usize },
}

/// Error constructing dice directly
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("A die must have at least one face")]
    ZeroFaces,
}
