//! Ranking paradigms for an unknown word from the suffix distribution its
//! prefixes show in a frequency trie.

pub mod candidates;
pub mod scorer;
pub mod strategy;
pub mod vote;

pub use candidates::{n_best, normalize};
pub use scorer::{ParadigmScorer, ScorerOptions};
pub use strategy::ScoringStrategy;
pub use vote::{SuffixScoreTable, lemma_suffix_scores};

use vzor_core::{Direction, RankedParadigm};

/// Order by score in the given direction, then by intersection (descending),
/// then by paradigm id
pub fn sort_ranking(ranking: &mut [RankedParadigm], direction: Direction) {
    ranking.sort_by(|a, b| {
        let by_score = match direction {
            Direction::LowerIsBetter => a.score.total_cmp(&b.score),
            Direction::HigherIsBetter => b.score.total_cmp(&a.score),
        };
        by_score
            .then_with(|| b.intersection.cmp(&a.intersection))
            .then_with(|| a.paradigm.cmp(&b.paradigm))
    });
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(paradigm: &str, score: f64, intersection: usize) -> RankedParadigm {
        RankedParadigm {
            paradigm: paradigm.to_string(),
            score,
            split: 0,
            intersection,
        }
    }

    #[test]
    fn ties_fall_back_to_intersection_then_id() {
        let mut ranking = vec![
            ranked("c", 1.0, 2),
            ranked("b", 1.0, 2),
            ranked("a", 1.0, 1),
            ranked("d", 0.5, 0),
        ];
        sort_ranking(&mut ranking, Direction::HigherIsBetter);
        let order: Vec<&str> = ranking.iter().map(|r| r.paradigm.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a", "d"]);

        sort_ranking(&mut ranking, Direction::LowerIsBetter);
        assert_eq!(ranking[0].paradigm, "d");
    }
}
