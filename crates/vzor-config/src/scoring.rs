use serde::{Deserialize, Serialize};
use vzor_core::{ScoringPolicy, WordTarget};

fn default_n_best() -> usize {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub policy: ScoringPolicy,
    pub target: WordTarget,
    /// Paradigms kept per split before scoring (ties with the last one are kept too)
    #[serde(default = "default_n_best")]
    pub n_best: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            policy: ScoringPolicy::default(),
            target: WordTarget::default(),
            n_best: default_n_best(),
        }
    }
}

impl ScoringConfig {
    pub fn new() -> Self {
        let policy = match std::env::var("VZOR_POLICY").as_deref() {
            Ok("linear_difference") => ScoringPolicy::LinearDifference,
            Ok("intersection_minus_squared") => ScoringPolicy::IntersectionMinusSquared,
            _ => ScoringPolicy::default(),
        };
        let target = match std::env::var("VZOR_TARGET").as_deref() {
            Ok("lemma") => WordTarget::Lemma,
            _ => WordTarget::default(),
        };

        Self {
            policy,
            target,
            n_best: crate::env_parse("VZOR_N_BEST").unwrap_or_else(default_n_best),
        }
    }
}
