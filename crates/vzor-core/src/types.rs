use serde::{Deserialize, Serialize};

/// Which way a score is better
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}

/// How a paradigm's spread is compared with the suffix distribution observed
/// at a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Sum of absolute per-suffix differences
    LinearDifference,
    /// Intersection size minus the sum of squared per-suffix differences
    #[default]
    IntersectionMinusSquared,
}

impl ScoringPolicy {
    pub fn direction(&self) -> Direction {
        match self {
            ScoringPolicy::LinearDifference => Direction::LowerIsBetter,
            ScoringPolicy::IntersectionMinusSquared => Direction::HigherIsBetter,
        }
    }
}

/// What kind of word is being guessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordTarget {
    /// The word is a lemma: the implied suffix must be a paradigm's common suffix
    Lemma,
    /// The word may be any inflected form
    #[default]
    AnyForm,
}

/// One entry of a ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedParadigm {
    pub paradigm: String,
    pub score: f64,
    /// Char offset of the split that produced the score
    pub split: usize,
    /// Shared suffixes between the observed distribution and the paradigm
    pub intersection: usize,
}
