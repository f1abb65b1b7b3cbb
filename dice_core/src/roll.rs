//! Roll - A pool of dice plus a flat modifier

use crate::die::Die;
use crate::parse::parse_roll;
use crate::ParseError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An ordered pool of dice summed together with a flat modifier
///
/// Build one from notation with [`Roll::parse`] or directly with [`Roll::new`].
/// Every call to [`Roll::roll`] is an independent trial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Roll {
    dice: Vec<Die>,
    modifier: i64,
}

impl Roll {
    pub fn new(dice: Vec<Die>, modifier: i64) -> Self {
        Roll { dice, modifier }
    }

    /// A roll with no dice, always producing `modifier`
    pub fn flat(modifier: i64) -> Self {
        Roll::new(Vec::new(), modifier)
    }

    /// Parse dice notation such as `"2d8+4"`, `"d6+1d4"` or `"5"`
    pub fn parse(notation: &str) -> Result<Self, ParseError> {
        parse_roll(notation)
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn modifier(&self) -> i64 {
        self.modifier
    }

    /// Roll all dice using the thread-local RNG and add the modifier
    pub fn roll(&self) -> i64 {
        let mut rng = rand::thread_rng();
        self.roll_with_rng(&mut rng)
    }

    /// Roll with a provided RNG (for deterministic testing)
    pub fn roll_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let sum: i64 = self
            .dice
            .iter()
            .map(|die| die.roll_with_rng(rng) as i64)
            .sum();
        sum.saturating_add(self.modifier)
    }

    /// Roll and return individual die results plus total
    pub fn roll_detailed_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> (Vec<u32>, i64) {
        let results: Vec<u32> = self.dice.iter().map(|die| die.roll_with_rng(rng)).collect();
        let sum: i64 = results.iter().map(|&r| r as i64).sum();
        (results, sum.saturating_add(self.modifier))
    }

    /// Smallest possible total
    pub fn min(&self) -> i64 {
        (self.dice.len() as i64).saturating_add(self.modifier)
    }

    /// Largest possible total
    pub fn max(&self) -> i64 {
        let faces: i64 = self.dice.iter().map(|d| d.faces() as i64).sum();
        faces.saturating_add(self.modifier)
    }

    /// Expected total
    pub fn average(&self) -> f64 {
        let dice: f64 = self.dice.iter().map(Die::average).sum();
        dice + self.modifier as f64
    }
}

impl FromStr for Roll {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Roll::parse(s)
    }
}

impl TryFrom<String> for Roll {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Roll::parse(&s)
    }
}

impl From<Roll> for String {
    fn from(roll: Roll) -> Self {
        roll.to_string()
    }
}

impl fmt::Display for Roll {
    /// Renders runs of identical dice as `NdF` terms, e.g. `2d6+1d4+3`.
    /// Negative modifiers render as `+-N` so the output parses back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms: Vec<String> = Vec::new();

        let mut i = 0;
        while i < self.dice.len() {
            let faces = self.dice[i].faces();
            let run = self.dice[i..]
                .iter()
                .take_while(|d| d.faces() == faces)
                .count();
            terms.push(format!("{}d{}", run, faces));
            i += run;
        }

        if self.modifier != 0 || terms.is_empty() {
            terms.push(self.modifier.to_string());
        }

        write!(f, "{}", terms.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn d(faces: u32) -> Die {
        Die::new(faces).unwrap()
    }

    #[test]
    fn test_flat_roll_returns_modifier() {
        let roll = Roll::flat(5);
        for _ in 0..10 {
            assert_eq!(roll.roll(), 5);
        }
    }

    #[test]
    fn test_roll_bounds() {
        let roll = Roll::new(vec![d(6), d(6)], 3);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..1000 {
            let result = roll.roll_with_rng(&mut rng);
            assert!((5..=15).contains(&result), "Roll {} out of range", result);
        }
    }

    #[test]
    fn test_negative_modifier() {
        let roll = Roll::parse("1d4+-10").unwrap();
        assert_eq!(roll.min(), -9);
        assert_eq!(roll.max(), -6);
        for _ in 0..100 {
            let result = roll.roll();
            assert!((-9..=-6).contains(&result));
        }
    }

    #[test]
    fn test_detailed_roll() {
        let roll = Roll::parse("3d6+2").unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let (dice, total) = roll.roll_detailed_with_rng(&mut rng);

        assert_eq!(dice.len(), 3);
        for die in &dice {
            assert!((1..=6).contains(die));
        }

        let sum: u32 = dice.iter().sum();
        assert_eq!(total, sum as i64 + 2);
    }

    #[test]
    fn test_extreme_modifier_saturates() {
        let high = Roll::parse("9223372036854775807+d6").unwrap();
        let low = Roll::parse("-9223372036854775808+d6").unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..20 {
            assert_eq!(high.roll_with_rng(&mut rng), i64::MAX);
            let (dice, total) = low.roll_detailed_with_rng(&mut rng);
            assert_eq!(total, i64::MIN + dice[0] as i64);
        }
        assert_eq!(high.min(), i64::MAX);
        assert_eq!(high.max(), i64::MAX);
    }

    #[test]
    fn test_same_seed_same_result() {
        let roll = Roll::parse("4d12+1").unwrap();
        let mut rng1 = StdRng::seed_from_u64(2024);
        let mut rng2 = StdRng::seed_from_u64(2024);

        for _ in 0..50 {
            assert_eq!(roll.roll_with_rng(&mut rng1), roll.roll_with_rng(&mut rng2));
        }
    }

    #[test]
    fn test_min_max_average() {
        let roll = Roll::parse("2d6+3").unwrap();
        assert_eq!(roll.min(), 5);
        assert_eq!(roll.max(), 15);
        assert!((roll.average() - 10.0).abs() < f64::EPSILON);

        let mixed = Roll::parse("d4+d8").unwrap();
        assert!((mixed.average() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display() {
        assert_eq!(Roll::parse("d8+4").unwrap().to_string(), "1d8+4");
        assert_eq!(Roll::parse("2d6").unwrap().to_string(), "2d6");
        assert_eq!(Roll::parse("1d4+1d4+1d6+2").unwrap().to_string(), "2d4+1d6+2");
        assert_eq!(Roll::parse("5").unwrap().to_string(), "5");
        assert_eq!(Roll::parse("0").unwrap().to_string(), "0");
        assert_eq!(Roll::parse("3d8+-2").unwrap().to_string(), "3d8+-2");
    }

    #[test]
    fn test_from_str() {
        let roll: Roll = "1d20+5".parse().unwrap();
        assert_eq!(roll.dice(), &[Die::D20]);
        assert_eq!(roll.modifier(), 5);
        assert!("2d".parse::<Roll>().is_err());
    }

    proptest! {
        #[test]
        fn prop_parse_counts_faces_modifier(count in 1usize..20, faces in 1u32..100, modifier in -50i64..50) {
            let roll = Roll::parse(&format!("{}d{}+{}", count, faces, modifier)).unwrap();
            prop_assert_eq!(roll.dice().len(), count);
            prop_assert!(roll.dice().iter().all(|d| d.faces() == faces));
            prop_assert_eq!(roll.modifier(), modifier);
        }

        #[test]
        fn prop_roll_within_range(count in 0usize..10, faces in 1u32..30, modifier in -20i64..20, seed in any::<u64>()) {
            let roll = Roll::new(vec![d(faces); count], modifier);
            let mut rng = StdRng::seed_from_u64(seed);
            let result = roll.roll_with_rng(&mut rng);
            prop_assert!(result >= count as i64 + modifier);
            prop_assert!(result <= count as i64 * faces as i64 + modifier);
        }

        #[test]
        fn prop_display_parses_back(count in 0usize..5, faces in 1u32..20, modifier in -10i64..10) {
            let roll = Roll::new(vec![d(faces); count], modifier);
            let reparsed = Roll::parse(&roll.to_string()).unwrap();
            prop_assert_eq!(reparsed, roll);
        }
    }
}
