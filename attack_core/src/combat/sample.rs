//! Sample - Parallel sequences collected from repeated attacks

use super::SimulationError;
use crate::stats::{Histogram, Summary};
use crate::types::{AttackOutcome, Outcome};
use serde::{Deserialize, Serialize};

/// Rolls, outcomes and damage of `n` attacks, aligned by trial index
///
/// The three sequences always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SampleParts")]
pub struct Sample {
    rolls: Vec<i64>,
    results: Vec<Outcome>,
    damage: Vec<i64>,
}

/// Unchecked serialized form of a sample
#[derive(Deserialize)]
struct SampleParts {
    rolls: Vec<i64>,
    results: Vec<Outcome>,
    damage: Vec<i64>,
}

impl TryFrom<SampleParts> for Sample {
    type Error = SimulationError;

    fn try_from(parts: SampleParts) -> Result<Self, Self::Error> {
        let len = parts.rolls.len();
        if parts.results.len() != len || parts.damage.len() != len {
            return Err(SimulationError::MismatchedSample {
                rolls: len,
                results: parts.results.len(),
                damage: parts.damage.len(),
            });
        }

        Ok(Sample {
            rolls: parts.rolls,
            results: parts.results,
            damage: parts.damage,
        })
    }
}

impl Sample {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one trial
    pub fn push(&mut self, outcome: AttackOutcome) {
        self.rolls.push(outcome.roll);
        self.results.push(outcome.outcome);
        self.damage.push(outcome.damage);
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Attack rolls (d20 + modifier)
    pub fn rolls(&self) -> &[i64] {
        &self.rolls
    }

    pub fn results(&self) -> &[Outcome] {
        &self.results
    }

    pub fn damage(&self) -> &[i64] {
        &self.damage
    }

    /// Trial `index` as a single outcome
    pub fn get(&self, index: usize) -> Option<AttackOutcome> {
        Some(AttackOutcome {
            roll: *self.rolls.get(index)?,
            outcome: *self.results.get(index)?,
            damage: *self.damage.get(index)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = AttackOutcome> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    pub fn summary(&self) -> Summary {
        Summary::from_sample(self)
    }

    /// Empirical probability of each damage value
    pub fn damage_histogram(&self) -> Histogram {
        Histogram::from_values(&self.damage)
    }
}

impl FromIterator<AttackOutcome> for Sample {
    fn from_iter<I: IntoIterator<Item = AttackOutcome>>(iter: I) -> Self {
        let mut sample = Sample::new();
        for outcome in iter {
            sample.push(outcome);
        }
        sample
    }
}

impl Extend<AttackOutcome> for Sample {
    fn extend<I: IntoIterator<Item = AttackOutcome>>(&mut self, iter: I) {
        for outcome in iter {
            self.push(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(roll: i64, outcome: Outcome, damage: i64) -> AttackOutcome {
        AttackOutcome {
            roll,
            outcome,
            damage,
        }
    }

    #[test]
    fn test_collect_keeps_alignment() {
        let sample: Sample = vec![
            outcome(25, Outcome::CriticalHit, 16),
            outcome(3, Outcome::CriticalMiss, 0),
            outcome(17, Outcome::Hit, 9),
        ]
        .into_iter()
        .collect();

        assert_eq!(sample.len(), 3);
        assert_eq!(sample.rolls(), &[25, 3, 17]);
        assert_eq!(
            sample.results(),
            &[Outcome::CriticalHit, Outcome::CriticalMiss, Outcome::Hit]
        );
        assert_eq!(sample.damage(), &[16, 0, 9]);
        assert_eq!(sample.get(2), Some(outcome(17, Outcome::Hit, 9)));
        assert_eq!(sample.get(3), None);
    }

    #[test]
    fn test_iter_round_trips() {
        let trials = vec![outcome(10, Outcome::Miss, 0), outcome(20, Outcome::Hit, 5)];
        let mut sample = Sample::new();
        sample.extend(trials.clone());

        let collected: Vec<AttackOutcome> = sample.iter().collect();
        assert_eq!(collected, trials);
    }

    #[test]
    fn test_deserialize_rejects_mismatched_lengths() {
        let toml = r#"
rolls = [1]
results = ["Critical Hit", "Critical Hit", "Critical Hit"]
damage = []
"#;
        let error = toml::from_str::<Sample>(toml).unwrap_err();
        assert!(error.to_string().contains("differ in length"), "{}", error);
    }

    #[test]
    fn test_deserialize_round_trip() {
        let sample: Sample = vec![
            outcome(25, Outcome::CriticalHit, 16),
            outcome(12, Outcome::Miss, 0),
        ]
        .into_iter()
        .collect();

        let toml = toml::to_string(&sample).unwrap();
        let restored: Sample = toml::from_str(&toml).unwrap();
        assert_eq!(restored, sample);
    }

    #[test]
    fn test_results_serialize_as_labels() {
        let sample: Sample = vec![outcome(25, Outcome::CriticalHit, 16)].into_iter().collect();
        let toml = toml::to_string(&sample).unwrap();
        assert!(toml.contains("\"Critical Hit\""), "{}", toml);
    }
}
