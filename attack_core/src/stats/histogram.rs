//! Histogram - Empirical probability distribution of integer values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Probability mass at one value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub value: i64,
    pub probability: f64,
}

/// Probability per distinct value, ordered by value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Build the empirical distribution of `values`
    pub fn from_values(values: &[i64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for &value in values {
            *counts.entry(value).or_insert(0) += 1;
        }

        let total = values.len() as f64;
        let bins = counts
            .into_iter()
            .map(|(value, count)| HistogramBin {
                value,
                probability: count as f64 / total,
            })
            .collect();

        Histogram { bins }
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Probability of exactly `value` (0 if never observed)
    pub fn probability_of(&self, value: i64) -> f64 {
        self.bins
            .binary_search_by_key(&value, |bin| bin.value)
            .map(|i| self.bins[i].probability)
            .unwrap_or(0.0)
    }

    /// Running sum of probabilities: P(X <= value) at each bin
    pub fn cumulative(&self) -> Histogram {
        let mut running = 0.0;
        let bins = self
            .bins
            .iter()
            .map(|bin| {
                running += bin.probability;
                HistogramBin {
                    value: bin.value,
                    probability: running.min(1.0),
                }
            })
            .collect();

        Histogram { bins }
    }

    /// Render as text bars, the tallest bin spanning `width` characters
    pub fn render(&self, width: usize) -> String {
        let max = self
            .bins
            .iter()
            .map(|bin| bin.probability)
            .fold(0.0, f64::max);
        let label_width = self
            .bins
            .iter()
            .map(|bin| bin.value.to_string().len())
            .max()
            .unwrap_or(1);

        let mut out = String::new();
        for bin in &self.bins {
            let len = if max > 0.0 {
                (bin.probability / max * width as f64).round() as usize
            } else {
                0
            };
            out.push_str(&format!(
                "{:>lw$} | {:<w$} {:>5.1}%\n",
                bin.value,
                "#".repeat(len),
                bin.probability * 100.0,
                lw = label_width,
                w = width,
            ));
        }
        out
    }
}
