use std::io::BufRead;

use vzor_core::{FreqListLayout, Result, freqlist::read_rows};

use crate::database::MorphDatabase;

/// Outcome of loading a spread list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpreadStats {
    pub matched: usize,
    pub skipped: usize,
}

impl MorphDatabase {
    /// Accumulate observed affix frequencies from a `paradigm word frequency`
    /// list. Every affix starts at zero; rows that do not resolve to an affix
    /// of a known paradigm are skipped.
    pub fn load_spread<R: BufRead>(&mut self, reader: R) -> Result<SpreadStats> {
        for paradigm in self.paradigms_mut() {
            paradigm.reset_spread();
        }

        let mut stats = SpreadStats::default();
        for row in read_rows(reader, FreqListLayout::ParadigmWordFreq) {
            let row = row?;
            let Some(paradigm) = self.paradigm_mut(&row.key) else {
                stats.skipped += 1;
                continue;
            };
            let Some(affix) = paradigm.affix_of(&row.word).map(str::to_string) else {
                stats.skipped += 1;
                continue;
            };
            *paradigm.spread_mut().entry(affix).or_default() += row.frequency as f64;
            stats.matched += 1;
        }

        if stats.skipped > 0 {
            tracing::debug!("Skipped {} spread rows without a matching affix", stats.skipped);
        }
        tracing::info!("Loaded spread: {} rows matched", stats.matched);
        Ok(stats)
    }

    /// Run `f` with the forms of `lemma` removed from the spread of
    /// `paradigm`, then restore the spread exactly as it was.
    ///
    /// `frequency_of` gives the corpus frequency of each generated form.
    pub fn with_form_excluded<R>(
        &mut self,
        paradigm: &str,
        lemma: &str,
        frequency_of: impl Fn(&str) -> u64,
        f: impl FnOnce(&Self) -> R,
    ) -> R {
        let Some(root) = self.word_root(lemma, paradigm).map(str::to_string) else {
            return f(self);
        };
        let Some(data) = self.paradigm_mut(paradigm) else {
            return f(self);
        };

        let saved = data.spread().clone();
        let affixes: Vec<String> = data.affixes().affixes().map(str::to_string).collect();
        for affix in affixes {
            let frequency = frequency_of(&format!("{root}{affix}")) as f64;
            if frequency == 0.0 {
                continue;
            }
            if let Some(value) = data.spread_mut().get_mut(&affix) {
                *value = (*value - frequency).max(0.0);
            }
        }

        let result = f(self);

        if let Some(data) = self.paradigm_mut(paradigm) {
            *data.spread_mut() = saved;
        }
        result
    }
}
