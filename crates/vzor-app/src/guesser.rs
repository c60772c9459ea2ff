use clap::ValueEnum;
use vzor_config::Config;
use vzor_core::{BoundaryFormat, FreqListLayout, FreqRow, RankedParadigm, Result, ScoringPolicy, SegmentedWord, Segmenter};
use vzor_morph::MorphDatabase;
use vzor_scorer::{ParadigmScorer, ScorerOptions, SuffixScoreTable, lemma_suffix_scores};
use vzor_trie::{BucketedTrie, FreqSource, FreqTrie};

use crate::commands::suffixes::lemma_suffixes;

/// How paradigms are ranked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// Compare suffix distributions from the frequency trie
    #[default]
    Trie,
    /// Vote by dictionary lemmas sharing the word's last pieces
    Vote,
    /// Vote over a precomputed set of the most common lemma suffixes
    Table,
}

/// Ranks words one after another, keeping the trie of the current first
/// letter between calls
pub struct Guesser<S: FreqSource> {
    strategy: Strategy,
    policy: ScoringPolicy,
    options: ScorerOptions,
    layout: FreqListLayout,
    trie: BucketedTrie<S>,
    table: Option<SuffixScoreTable>,
}

impl<S: FreqSource> Guesser<S> {
    pub fn new(strategy: Strategy, config: &Config, db: &MorphDatabase, source: S) -> Self {
        let layout = config.data.frequency_layout;
        let table = (strategy == Strategy::Table).then(|| {
            let suffixes = lemma_suffixes(db.vocabulary(), config.guess.common_suffixes);
            SuffixScoreTable::build(&suffixes, db.vocabulary())
        });

        Self {
            strategy,
            policy: config.scoring.policy,
            options: ScorerOptions {
                n_best: config.scoring.n_best,
                target: config.scoring.target,
            },
            layout,
            trie: BucketedTrie::new(source, layout),
            table,
        }
    }

    /// Load the trie bucket of the word's first letter when the trie is used
    pub fn enter_bucket(&mut self, word: &SegmentedWord) -> Result<bool> {
        match (self.strategy, word.first_letter()) {
            (Strategy::Trie, Some(letter)) => self.trie.rebuild_if_boundary_crossed(letter),
            _ => Ok(false),
        }
    }

    pub fn trie(&self) -> &FreqTrie {
        self.trie.trie()
    }

    /// Segmentation of a frequency-list row: the list's own column for
    /// segmented layouts, the segmenter otherwise
    pub fn segment(&self, segmenter: &dyn Segmenter, row: &FreqRow) -> SegmentedWord {
        match self.layout {
            FreqListLayout::SegmentedWordFreq(_) => SegmentedWord::parse(&row.key, BoundaryFormat::CaseMarked),
            _ => SegmentedWord::from_pieces(segmenter.segment(&row.word)),
        }
    }

    /// Frequency of `form` in the current bucket. Segmented buckets are
    /// searched by surface word, whatever segmentation the list used.
    pub fn frequency_of(&self, form: &str) -> u64 {
        match self.layout {
            FreqListLayout::SegmentedWordFreq(_) => self.trie().surface_frequency(form),
            _ => self.trie().lookup(form),
        }
    }

    pub fn guess(&self, db: &MorphDatabase, word: &SegmentedWord) -> Vec<RankedParadigm> {
        match self.strategy {
            Strategy::Trie => ParadigmScorer::new(db, self.policy, self.options).rank(word, self.trie()),
            Strategy::Vote => lemma_suffix_scores(word, db.vocabulary()),
            Strategy::Table => self
                .table
                .as_ref()
                .map(|table| table.rank(&word.surface()))
                .unwrap_or_default(),
        }
    }
}
