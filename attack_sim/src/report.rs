//! Report - Text and JSON rendering of a finished sample

use attack_core::{Attack, Histogram, Sample, Summary, Target};
use serde::Serialize;

/// Everything printed for one simulation run
#[derive(Debug, Serialize)]
pub struct Report {
    pub damage: String,
    pub attack_modifier: i64,
    pub target: Target,
    pub summary: Summary,
    pub distribution: Histogram,
    pub cumulative: Histogram,
}

impl Report {
    pub fn new(attack: &Attack, sample: &Sample) -> Self {
        let distribution = sample.damage_histogram();
        let cumulative = distribution.cumulative();

        Report {
            damage: attack.damage.to_string(),
            attack_modifier: attack.modifier,
            target: attack.target,
            summary: sample.summary(),
            distribution,
            cumulative,
        }
    }

    /// Plain-text report with histogram bars `width` characters wide
    pub fn render(&self, width: usize) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Attack: {:+} vs AC {}, damage {} ({} samples)\n\n",
            self.attack_modifier, self.target.ac, self.damage, self.summary.samples
        ));
        out.push_str(&format!("Hit chance {:.1}%\n", self.summary.hit_chance * 100.0));
        out.push_str(&format!("Crit chance {:.1}%\n", self.summary.crit_chance * 100.0));
        out.push_str(&format!(
            "Expected damage: {:.2}\n",
            self.summary.expected_damage
        ));
        out.push_str(&format!("Damage spread: {:.2}\n", self.summary.damage_spread));

        out.push_str("\nDamage Distribution\n");
        out.push_str(&self.distribution.render(width));
        out.push_str("\nCumulative Damage Distribution\n");
        out.push_str(&self.cumulative.render(width));

        out
    }
}
