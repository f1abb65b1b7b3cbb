//! Core types for attack resolution

use serde::{Deserialize, Serialize};
use std::fmt;

/// Margin between degrees of success on the d20 ladder
pub const DEGREE_MARGIN: i64 = 10;

/// Defense values of the creature being attacked
///
/// Only `ac` takes part in attack resolution; the saves are carried along
/// for scenarios that record them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    #[serde(default = "default_ac")]
    pub ac: i64,
    #[serde(default)]
    pub fortitude: i64,
    #[serde(default)]
    pub reflex: i64,
    #[serde(default)]
    pub will: i64,
}

impl Target {
    pub fn new(ac: i64, fortitude: i64, reflex: i64, will: i64) -> Self {
        Target {
            ac,
            fortitude,
            reflex,
            will,
        }
    }

    /// A target with only an armour class set
    pub fn with_ac(ac: i64) -> Self {
        Target::new(ac, 0, 0, 0)
    }
}

impl Default for Target {
    fn default() -> Self {
        Target::with_ac(default_ac())
    }
}

fn default_ac() -> i64 {
    15
}

/// Degree of success of a single attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "Critical Hit")]
    CriticalHit,
    #[serde(rename = "Hit")]
    Hit,
    #[serde(rename = "Miss")]
    Miss,
    #[serde(rename = "Critical Miss")]
    CriticalMiss,
}

impl Outcome {
    /// All outcomes, best first
    pub fn all() -> &'static [Outcome] {
        &[
            Outcome::CriticalHit,
            Outcome::Hit,
            Outcome::Miss,
            Outcome::CriticalMiss,
        ]
    }

    /// Classify an attack roll against a difficulty class
    ///
    /// Thresholds are checked best first:
    /// - `roll >= dc + 10` is a critical hit
    /// - `roll >= dc` is a hit
    /// - `roll >= dc - 10` is a miss
    /// - anything lower is a critical miss
    pub fn classify(roll: i64, dc: i64) -> Outcome {
        let margin = roll.saturating_sub(dc);
        if margin >= DEGREE_MARGIN {
            Outcome::CriticalHit
        } else if margin >= 0 {
            Outcome::Hit
        } else if margin >= -DEGREE_MARGIN {
            Outcome::Miss
        } else {
            Outcome::CriticalMiss
        }
    }

    /// Whether this outcome deals damage
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::CriticalHit | Outcome::Hit)
    }

    /// How many damage rolls' worth this outcome deals
    pub fn damage_multiplier(&self) -> i64 {
        match self {
            Outcome::CriticalHit => 2,
            Outcome::Hit => 1,
            Outcome::Miss | Outcome::CriticalMiss => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::CriticalHit => "Critical Hit",
            Outcome::Hit => "Hit",
            Outcome::Miss => "Miss",
            Outcome::CriticalMiss => "Critical Miss",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one simulated attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// d20 plus attack modifier
    pub roll: i64,
    pub outcome: Outcome,
    /// Damage dealt, never negative
    pub damage: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries_ac_15() {
        assert_eq!(Outcome::classify(4, 15), Outcome::CriticalMiss);
        assert_eq!(Outcome::classify(5, 15), Outcome::Miss);
        assert_eq!(Outcome::classify(14, 15), Outcome::Miss);
        assert_eq!(Outcome::classify(15, 15), Outcome::Hit);
        assert_eq!(Outcome::classify(24, 15), Outcome::Hit);
        assert_eq!(Outcome::classify(25, 15), Outcome::CriticalHit);
    }

    #[test]
    fn test_classify_extremes() {
        assert_eq!(Outcome::classify(100, 15), Outcome::CriticalHit);
        assert_eq!(Outcome::classify(-100, 15), Outcome::CriticalMiss);
        assert_eq!(Outcome::classify(0, -10), Outcome::CriticalHit);
    }

    #[test]
    fn test_classify_extreme_values() {
        assert_eq!(Outcome::classify(i64::MAX, i64::MAX), Outcome::Hit);
        assert_eq!(Outcome::classify(i64::MAX - 10, i64::MAX), Outcome::Miss);
        assert_eq!(Outcome::classify(i64::MIN, i64::MAX), Outcome::CriticalMiss);
        assert_eq!(Outcome::classify(i64::MAX, i64::MIN), Outcome::CriticalHit);
        assert_eq!(Outcome::classify(i64::MIN + 10, i64::MIN), Outcome::CriticalHit);
        assert_eq!(Outcome::classify(i64::MIN, i64::MIN + 5), Outcome::Miss);
    }

    #[test]
    fn test_damage_multiplier() {
        assert_eq!(Outcome::CriticalHit.damage_multiplier(), 2);
        assert_eq!(Outcome::Hit.damage_multiplier(), 1);
        assert_eq!(Outcome::Miss.damage_multiplier(), 0);
        assert_eq!(Outcome::CriticalMiss.damage_multiplier(), 0);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = Outcome::all().iter().map(|o| o.to_string()).collect();
        assert_eq!(labels, vec!["Critical Hit", "Hit", "Miss", "Critical Miss"]);
    }

    #[test]
    fn test_target_defaults() {
        let target: Target = toml::from_str("").unwrap();
        assert_eq!(target, Target::default());
        assert_eq!(target.ac, 15);

        let target: Target = toml::from_str("ac = 20\nwill = 12").unwrap();
        assert_eq!(target.ac, 20);
        assert_eq!(target.will, 12);
        assert_eq!(target.fortitude, 0);
    }
}
