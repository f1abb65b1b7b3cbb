//! Attack resolution - d20 roll against a target's AC

use super::sample::Sample;
use super::SimulationError;
use crate::types::{AttackOutcome, Outcome, Target};
use dice_core::{Die, Roll};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of trials used when no sample size is given
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

/// A damage roll and attack bonus aimed at one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub damage: Roll,
    pub modifier: i64,
    pub target: Target,
}

impl Attack {
    pub fn new(damage: Roll, modifier: i64, target: Target) -> Self {
        Attack {
            damage,
            modifier,
            target,
        }
    }

    /// Resolve one attack using the thread-local RNG
    pub fn simulate(&self) -> AttackOutcome {
        let mut rng = rand::thread_rng();
        self.simulate_with_rng(&mut rng)
    }

    /// Resolve one attack with a provided RNG (for deterministic testing)
    ///
    /// 1. Roll a d20 and add the attack modifier
    /// 2. Classify the roll against the target's AC
    /// 3. Roll damage once for a hit, doubled for a critical hit
    pub fn simulate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> AttackOutcome {
        let roll = (Die::D20.roll_with_rng(rng) as i64).saturating_add(self.modifier);
        let outcome = Outcome::classify(roll, self.target.ac);

        // Misses never touch the damage roll
        let damage = if outcome.is_hit() {
            let rolled = self.damage.roll_with_rng(rng);
            rolled.saturating_mul(outcome.damage_multiplier()).max(0)
        } else {
            0
        };

        AttackOutcome {
            roll,
            outcome,
            damage,
        }
    }

    /// Run `n` independent attacks using the thread-local RNG
    pub fn sample(&self, n: usize) -> Result<Sample, SimulationError> {
        let mut rng = rand::thread_rng();
        self.sample_with_rng(n, &mut rng)
    }

    /// Run `n` independent attacks with a reproducible seed
    pub fn sample_seeded(&self, n: usize, seed: u64) -> Result<Sample, SimulationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.sample_with_rng(n, &mut rng)
    }

    /// Run `n` independent attacks with a provided RNG
    pub fn sample_with_rng<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Sample, SimulationError> {
        if n == 0 {
            return Err(SimulationError::EmptySample);
        }

        debug!(
            samples = n,
            damage = %self.damage,
            modifier = self.modifier,
            ac = self.target.ac,
            "Sampling attack"
        );

        let sample: Sample = (0..n).map(|_| self.simulate_with_rng(rng)).collect();
        Ok(sample)
    }
}
