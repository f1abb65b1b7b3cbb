//! Summary - Hit/crit chance and damage moments of a sample

use crate::combat::Sample;
use crate::types::Outcome;
use serde::{Deserialize, Serialize};

/// Aggregate statistics of a sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of trials summarized
    pub samples: usize,
    /// Fraction of critical hits
    pub crit_chance: f64,
    /// Fraction of hits or better (includes critical hits)
    pub hit_chance: f64,
    /// Mean damage per attack, misses included
    pub expected_damage: f64,
    /// Population standard deviation of damage
    pub damage_spread: f64,
    critical_hits: usize,
    hits: usize,
    misses: usize,
    critical_misses: usize,
}

impl Summary {
    /// Compute the summary of a sample
    ///
    /// An empty sample yields all-zero statistics.
    pub fn from_sample(sample: &Sample) -> Self {
        let mut summary = Summary {
            samples: sample.len(),
            crit_chance: 0.0,
            hit_chance: 0.0,
            expected_damage: 0.0,
            damage_spread: 0.0,
            critical_hits: 0,
            hits: 0,
            misses: 0,
            critical_misses: 0,
        };

        for trial in sample.iter() {
            match trial.outcome {
                Outcome::CriticalHit => summary.critical_hits += 1,
                Outcome::Hit => summary.hits += 1,
                Outcome::Miss => summary.misses += 1,
                Outcome::CriticalMiss => summary.critical_misses += 1,
            }
        }

        if summary.samples == 0 {
            return summary;
        }

        let n = summary.samples as f64;
        summary.crit_chance = summary.critical_hits as f64 / n;
        summary.hit_chance = summary.hits as f64 / n + summary.crit_chance;

        let damage: Vec<i64> = sample.iter().map(|trial| trial.damage).collect();
        let (mean, std_dev) = mean_and_std_dev(&damage);
        summary.expected_damage = mean;
        summary.damage_spread = std_dev;

        summary
    }

    /// Number of trials that ended in `outcome`
    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::CriticalHit => self.critical_hits,
            Outcome::Hit => self.hits,
            Outcome::Miss => self.misses,
            Outcome::CriticalMiss => self.critical_misses,
        }
    }
}

/// Mean and population standard deviation (divides by n, not n - 1)
fn mean_and_std_dev(values: &[i64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }

    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| {
            let diff = v as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;

    (mean, variance.sqrt())
}
