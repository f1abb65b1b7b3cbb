//! Scenario configuration - one attack and how many times to sample it

use super::ConfigError;
use crate::combat::{Attack, DEFAULT_SAMPLE_SIZE};
use crate::types::Target;
use dice_core::Roll;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A simulation scenario as stored in TOML
///
/// ```toml
/// damage = "d8+4"
/// attack_modifier = 7
/// sample_size = 1000
/// seed = 42
///
/// [target]
/// ac = 15
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Damage roll notation
    #[serde(default = "default_damage")]
    pub damage: String,
    #[serde(default = "default_attack_modifier")]
    pub attack_modifier: i64,
    #[serde(default)]
    pub target: Target,
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Fixed seed for reproducible samples
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            damage: default_damage(),
            attack_modifier: default_attack_modifier(),
            target: Target::default(),
            sample_size: default_sample_size(),
            seed: None,
        }
    }
}

fn default_damage() -> String {
    "d8+4".to_string()
}
fn default_attack_modifier() -> i64 {
    7
}
fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

impl ScenarioConfig {
    /// Load and validate a scenario from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let config: ScenarioConfig = super::load_toml(path)?;
        config.validate().map_err(|e| e.with_path(path))?;
        debug!(path = %path.display(), damage = %config.damage, "Loaded scenario");
        Ok(config)
    }

    /// Parse and validate a scenario from a TOML string
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let config: ScenarioConfig = super::parse_toml(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the damage notation parses and the sample size is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.damage_roll()?;
        if self.sample_size == 0 {
            return Err(ConfigError::Validation {
                message: "sample_size must be at least 1".to_string(),
                path: None,
            });
        }
        Ok(())
    }

    /// Parse the damage notation
    pub fn damage_roll(&self) -> Result<Roll, ConfigError> {
        Roll::parse(&self.damage).map_err(|e| ConfigError::Validation {
            message: format!("damage '{}': {}", self.damage, e),
            path: None,
        })
    }

    /// Build the attack this scenario describes
    pub fn build_attack(&self) -> Result<Attack, ConfigError> {
        Ok(Attack::new(
            self.damage_roll()?,
            self.attack_modifier,
            self.target,
        ))
    }
}
