use std::collections::HashMap;

use vzor_core::{Direction, ScoringPolicy};

/// Compares the suffix distribution observed at a split with a paradigm's
/// spread
pub trait ScoringStrategy {
    fn direction(&self) -> Direction;

    fn score(
        &self,
        observed: &HashMap<String, f64>,
        spread: &HashMap<String, f64>,
        intersection: usize,
    ) -> f64;
}

impl ScoringStrategy for ScoringPolicy {
    fn direction(&self) -> Direction {
        ScoringPolicy::direction(self)
    }

    fn score(
        &self,
        observed: &HashMap<String, f64>,
        spread: &HashMap<String, f64>,
        intersection: usize,
    ) -> f64 {
        match self {
            ScoringPolicy::LinearDifference => {
                let only_spread = spread
                    .iter()
                    .filter(|(suffix, _)| !observed.contains_key(*suffix))
                    .map(|(_, value)| value.abs());
                observed
                    .iter()
                    .map(|(suffix, value)| (value - spread.get(suffix).copied().unwrap_or(0.0)).abs())
                    .chain(only_spread)
                    .sum()
            }
            ScoringPolicy::IntersectionMinusSquared => {
                let squared: f64 = spread
                    .iter()
                    .map(|(suffix, value)| {
                        let diff = observed.get(suffix).copied().unwrap_or(0.0) - value;
                        diff * diff
                    })
                    .sum();
                intersection as f64 - squared
            }
        }
    }
}
