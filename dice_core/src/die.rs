//! A single polyhedral die

use crate::DiceError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One die with a fixed number of faces, rolling uniformly in `1..=faces`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Die {
    faces: u32,
}

impl Die {
    /// The twenty-sided die used for attack rolls
    pub const D20: Die = Die { faces: 20 };

    /// Create a die with the given number of faces
    pub fn new(faces: u32) -> Result<Self, DiceError> {
        if faces == 0 {
            return Err(DiceError::ZeroFaces);
        }
        Ok(Die { faces })
    }

    pub fn faces(&self) -> u32 {
        self.faces
    }

    /// Roll the die using the thread-local RNG
    pub fn roll(&self) -> u32 {
        let mut rng = rand::thread_rng();
        self.roll_with_rng(&mut rng)
    }

    /// Roll the die with a provided RNG (for deterministic testing)
    pub fn roll_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(1..=self.faces)
    }

    /// Average result of a single roll
    pub fn average(&self) -> f64 {
        (1.0 + self.faces as f64) / 2.0
    }
}

impl TryFrom<u32> for Die {
    type Error = DiceError;

    fn try_from(faces: u32) -> Result<Self, Self::Error> {
        Die::new(faces)
    }
}

impl From<Die> for u32 {
    fn from(die: Die) -> Self {
        die.faces
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.faces)
    }
}
