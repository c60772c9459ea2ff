use std::collections::HashMap;

use vzor_core::{RankedParadigm, SegmentedWord, WordTarget};
use vzor_morph::MorphDatabase;
use vzor_trie::FreqTrie;

use crate::candidates::{n_best, normalize};
use crate::sort_ranking;
use crate::strategy::ScoringStrategy;

#[derive(Debug, Clone, Copy)]
pub struct ScorerOptions {
    /// Paradigms kept per split before scoring (ties included)
    pub n_best: usize,
    pub target: WordTarget,
}

impl Default for ScorerOptions {
    fn default() -> Self {
        Self {
            n_best: 5,
            target: WordTarget::default(),
        }
    }
}

/// Best split found so far for one paradigm
struct Candidate {
    split: usize,
    intersection: usize,
    observed: usize,
}

pub struct ParadigmScorer<'a, S> {
    db: &'a MorphDatabase,
    strategy: S,
    options: ScorerOptions,
}

impl<'a, S: ScoringStrategy> ParadigmScorer<'a, S> {
    pub fn new(db: &'a MorphDatabase, strategy: S, options: ScorerOptions) -> Self {
        Self {
            db,
            strategy,
            options,
        }
    }

    pub fn options(&self) -> &ScorerOptions {
        &self.options
    }

    fn is_known(&self, suffix: &str) -> bool {
        match self.options.target {
            WordTarget::AnyForm => self.db.is_known_affix(suffix),
            WordTarget::Lemma => self.db.is_known_common_suffix(suffix),
        }
    }

    fn paradigms_for(&self, suffix: &str) -> &'a [String] {
        match self.options.target {
            WordTarget::AnyForm => self.db.paradigms_with_affix(suffix),
            WordTarget::Lemma => self.db.paradigms_with_common_suffix(suffix),
        }
    }

    /// Rank paradigms for `word` using the trie of its first letter. An empty
    /// ranking means nothing matched.
    pub fn rank(&self, word: &SegmentedWord, trie: &FreqTrie) -> Vec<RankedParadigm> {
        let chars: Vec<char> = word.surface().chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }

        let mut splits = word.boundaries();
        splits.push(chars.len());

        let mut observations: Vec<HashMap<String, f64>> = Vec::new();
        let mut best: HashMap<&str, Candidate> = HashMap::new();

        for split in splits {
            let prefix: String = chars[..split].iter().collect();
            let suffix: String = chars[split..].iter().collect();
            if split < chars.len() && !self.is_known(&suffix) {
                continue;
            }

            let observed = normalize(&trie.suffixes(&prefix));
            if observed.is_empty() {
                continue;
            }

            let candidates = self
                .paradigms_for(&suffix)
                .iter()
                .filter_map(|id| self.db.paradigm(id));
            let kept = n_best(&observed, candidates, self.options.n_best);
            if kept.is_empty() {
                continue;
            }
            tracing::debug!(
                "Split {}|{}: {} observed suffixes, {} candidates",
                prefix,
                suffix,
                observed.len(),
                kept.len()
            );

            let index = observations.len();
            for (paradigm, intersection) in kept {
                // an equal intersection keeps the earlier split
                let replace = best
                    .get(paradigm.id())
                    .is_none_or(|current| intersection > current.intersection);
                if replace {
                    best.insert(
                        paradigm.id(),
                        Candidate {
                            split,
                            intersection,
                            observed: index,
                        },
                    );
                }
            }
            observations.push(observed);
        }

        let mut ranking: Vec<RankedParadigm> = best
            .into_iter()
            .filter_map(|(id, candidate)| {
                let paradigm = self.db.paradigm(id)?;
                let spread = normalize(paradigm.spread());
                let score = self.strategy.score(
                    &observations[candidate.observed],
                    &spread,
                    candidate.intersection,
                );
                Some(RankedParadigm {
                    paradigm: id.to_string(),
                    score,
                    split: candidate.split,
                    intersection: candidate.intersection,
                })
            })
            .collect();

        sort_ranking(&mut ranking, self.strategy.direction());
        ranking
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::database;
    use vzor_core::{BoundaryFormat, ScoringPolicy};

    fn trie() -> FreqTrie {
        [
            ("kočka", 120),
            ("kočky", 45),
            ("kočce", 30),
            ("kočku", 20),
            ("kočkou", 12),
            ("kočkám", 2),
            ("kočkovi", 1),
        ]
        .into_iter()
        .collect()
    }

    fn scorer(db: &MorphDatabase, target: WordTarget) -> ParadigmScorer<'_, ScoringPolicy> {
        let options = ScorerOptions { n_best: 5, target };
        ParadigmScorer::new(db, ScoringPolicy::IntersectionMinusSquared, options)
    }

    #[test]
    fn feminine_word_ranks_zena_first() {
        let db = database();
        let word = SegmentedWord::parse("kočkA", BoundaryFormat::CaseMarked);
        let ranking = scorer(&db, WordTarget::AnyForm).rank(&word, &trie());
        assert_eq!(ranking.len(), 3);

        let best = &ranking[0];
        assert_eq!(best.paradigm, "žena");
        assert_eq!(best.split, 4);
        // a, y, u, ou, ám
        assert_eq!(best.intersection, 5);
        assert_eq!(best.score, 5.0);

        // pán shares a and ovi at the same split, hrad only matches the whole word
        assert_eq!((ranking[1].paradigm.as_str(), ranking[1].split), ("pán", 4));
        assert_eq!((ranking[2].paradigm.as_str(), ranking[2].split), ("hrad", 5));
    }

    #[test]
    fn unknown_non_final_suffix_is_pruned() {
        let db = database();
        // "čka" is no affix, so only the final split is tried
        let word = SegmentedWord::parse("koČka", BoundaryFormat::CaseMarked);
        let ranking = scorer(&db, WordTarget::AnyForm).rank(&word, &trie());
        assert!(ranking.iter().all(|r| r.split == 5));
    }

    #[test]
    fn lemma_target_uses_common_suffixes() {
        let db = database();
        let word = SegmentedWord::parse("kočkA", BoundaryFormat::CaseMarked);
        let ranking = scorer(&db, WordTarget::Lemma).rank(&word, &trie());
        assert_eq!(ranking.len(), 3);
        assert_eq!((ranking[0].paradigm.as_str(), ranking[0].split), ("žena", 4));
        // hrad and pán have an empty common suffix
        assert!(ranking[1..].iter().all(|r| r.split == 5 && r.intersection == 1));
    }

    #[test]
    fn linear_difference_ranks_closest_spread_first() {
        let mut db = database();
        let spread = "žena žena 4\nžena ženy 2\nžena ženu 1\npán pán 2\npán pána 2\n";
        db.load_spread(spread.as_bytes()).unwrap();
        let trie: FreqTrie = [("kočka", 4), ("kočky", 2), ("kočku", 1)].into_iter().collect();

        let options = ScorerOptions {
            n_best: 5,
            target: WordTarget::AnyForm,
        };
        let word = SegmentedWord::parse("kočkA", BoundaryFormat::CaseMarked);
        let ranking = ParadigmScorer::new(&db, ScoringPolicy::LinearDifference, options).rank(&word, &trie);

        let order: Vec<(&str, f64)> = ranking.iter().map(|r| (r.paradigm.as_str(), r.score)).collect();
        // žena matches a, y, u exactly; hrad has no spread; pán misses y, u and ""
        assert_eq!(order, vec![("žena", 0.0), ("hrad", 1.0), ("pán", 1.75)]);
    }

    #[test]
    fn no_match_is_an_empty_ranking() {
        let db = database();
        let word = SegmentedWord::parse("pes", BoundaryFormat::CaseMarked);
        assert!(scorer(&db, WordTarget::AnyForm).rank(&word, &trie()).is_empty());
        assert!(scorer(&db, WordTarget::AnyForm).rank(&SegmentedWord::default(), &trie()).is_empty());
    }
}
