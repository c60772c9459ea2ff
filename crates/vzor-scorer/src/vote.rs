//! Suffix vote: paradigms of dictionary lemmas sharing the longest ending
//! with the word win.

use std::collections::HashMap;

use vzor_core::{Direction, RankedParadigm, SegmentedWord};
use vzor_morph::Vocabulary;

use crate::sort_ranking;

/// Score each paradigm by `chars(suffix) × lemmas ending with it`, keeping the
/// best suffix. Suffixes grow by one piece at a time until no lemma matches.
pub fn lemma_suffix_scores(word: &SegmentedWord, vocabulary: &Vocabulary) -> Vec<RankedParadigm> {
    let total = word.char_len();
    let mut lemmas: Vec<(String, &str)> = vocabulary
        .unique()
        .map(|(lemma, paradigm)| (lemma.to_lowercase(), paradigm))
        .collect();
    let mut scores: HashMap<&str, (u64, usize)> = HashMap::new();

    for suffix in word.piece_suffixes() {
        lemmas.retain(|(lemma, _)| lemma.ends_with(&suffix));
        if lemmas.is_empty() {
            break;
        }

        let length = suffix.chars().count();
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for (_, paradigm) in &lemmas {
            *counts.entry(*paradigm).or_default() += 1;
        }
        for (paradigm, count) in counts {
            let score = length as u64 * count;
            let entry = scores.entry(paradigm).or_insert((0, total));
            if score > entry.0 {
                *entry = (score, total - length);
            }
        }
    }

    into_ranking(scores)
}

/// Precomputed vote scores for a fixed set of common suffixes
#[derive(Debug, Clone, Default)]
pub struct SuffixScoreTable {
    scores: HashMap<String, HashMap<String, u64>>,
}

impl SuffixScoreTable {
    pub fn build(common_suffixes: &[String], vocabulary: &Vocabulary) -> Self {
        let lemmas: Vec<(String, &str)> = vocabulary
            .unique()
            .map(|(lemma, paradigm)| (lemma.to_lowercase(), paradigm))
            .collect();

        let mut scores = HashMap::new();
        for suffix in common_suffixes {
            let length = suffix.chars().count() as u64;
            let mut per_paradigm: HashMap<String, u64> = HashMap::new();
            for (lemma, paradigm) in &lemmas {
                if lemma.ends_with(suffix.as_str()) {
                    *per_paradigm.entry(paradigm.to_string()).or_default() += length;
                }
            }
            if !per_paradigm.is_empty() {
                scores.insert(suffix.clone(), per_paradigm);
            }
        }

        tracing::debug!("Built vote table for {} suffixes", scores.len());
        Self { scores }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Best score per paradigm over the table suffixes `word` ends with
    pub fn rank(&self, word: &str) -> Vec<RankedParadigm> {
        let word = word.to_lowercase();
        let total = word.chars().count();
        let mut best: HashMap<&str, (u64, usize)> = HashMap::new();

        for (suffix, per_paradigm) in &self.scores {
            if !word.ends_with(suffix.as_str()) {
                continue;
            }
            let split = total - suffix.chars().count();
            for (paradigm, &score) in per_paradigm {
                let entry = best.entry(paradigm.as_str()).or_insert((0, total));
                if score > entry.0 || (score == entry.0 && split < entry.1) {
                    *entry = (score, split);
                }
            }
        }

        into_ranking(best)
    }
}

fn into_ranking(scores: HashMap<&str, (u64, usize)>) -> Vec<RankedParadigm> {
    let mut ranking: Vec<RankedParadigm> = scores
        .into_iter()
        .filter(|(_, (score, _))| *score > 0)
        .map(|(paradigm, (score, split))| RankedParadigm {
            paradigm: paradigm.to_string(),
            score: score as f64,
            split,
            intersection: 0,
        })
        .collect();
    sort_ranking(&mut ranking, Direction::HigherIsBetter);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::database;
    use vzor_core::BoundaryFormat;

    #[test]
    fn longer_shared_endings_win() {
        let db = database();
        let word = SegmentedWord::parse("babKa", BoundaryFormat::CaseMarked);
        let ranking = lemma_suffix_scores(&word, db.vocabulary());

        // pieces give the suffixes "ka" (kočka, matka: 2 × 2) and "babka" (none)
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].paradigm, "žena");
        assert_eq!(ranking[0].score, 4.0);
        assert_eq!(ranking[0].split, 3);
    }

    #[test]
    fn stops_when_nothing_matches() {
        let db = database();
        let word = SegmentedWord::parse("xyZ", BoundaryFormat::CaseMarked);
        assert!(lemma_suffix_scores(&word, db.vocabulary()).is_empty());
    }

    #[test]
    fn table_ranks_by_best_suffix() {
        let db = database();
        let suffixes: Vec<String> = ["a", "ka", "s", "os"].iter().map(|s| s.to_string()).collect();
        let table = SuffixScoreTable::build(&suffixes, db.vocabulary());
        assert_eq!(table.len(), 4);

        let ranking = table.rank("Děvka");
        assert_eq!(ranking[0].paradigm, "žena");
        assert_eq!(ranking[0].score, 4.0);

        // "s": les, kos (hrad 1, pán 1); "os": kos (pán 2)
        let ranking = table.rank("nos");
        let order: Vec<(&str, f64)> = ranking.iter().map(|r| (r.paradigm.as_str(), r.score)).collect();
        assert_eq!(order, vec![("pán", 2.0), ("hrad", 1.0)]);
        assert!(table.rank("pes").iter().all(|r| r.paradigm != "žena"));
    }
}
