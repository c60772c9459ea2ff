use std::collections::HashMap;
use std::io::BufRead;

use vzor_core::{Preprocessor, Result, VzorError};

/// Lemma → paradigm assignments from a dictionary file.
///
/// Every entry is kept in file order (duplicates included); lookups by lemma
/// see the last assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `lemma:paradigm|extra` lines. Blank lines and lines starting with
    /// a space or `|` are skipped; `!` and `%` flags after the paradigm are dropped.
    pub fn parse<R: BufRead>(
        reader: R,
        origin: &str,
        preprocessor: &dyn Preprocessor,
    ) -> Result<Self> {
        let mut vocabulary = Self::new();

        for (index, line) in reader.lines().enumerate() {
            let line = preprocessor.process(&line?);
            if line.starts_with(' ') || line.starts_with('|') || line.trim().is_empty() {
                continue;
            }

            let record = line.split('|').next().unwrap_or_default();
            let mut parts = record.split(':');
            match (parts.next(), parts.next()) {
                (Some(lemma), Some(paradigm)) if !lemma.is_empty() => {
                    let paradigm = paradigm.trim().trim_end_matches(['!', '%']);
                    vocabulary.push(lemma, paradigm);
                }
                _ => {
                    return Err(VzorError::malformed(
                        origin,
                        index + 1,
                        format!("expected lemma:paradigm, got {line:?}"),
                    ));
                }
            }
        }

        tracing::debug!("Read {} dictionary entries from {}", vocabulary.len(), origin);
        Ok(vocabulary)
    }

    pub fn push(&mut self, lemma: &str, paradigm: &str) {
        self.index.insert(lemma.to_string(), self.entries.len());
        self.entries.push((lemma.to_string(), paradigm.to_string()));
    }

    /// All entries in file order, duplicates included
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// One entry per lemma, carrying its last assignment
    pub fn unique(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(i, (lemma, _))| self.index.get(lemma) == Some(i))
            .map(|(_, (lemma, paradigm))| (lemma.as_str(), paradigm.as_str()))
    }

    pub fn paradigm_of(&self, lemma: &str) -> Option<&str> {
        self.index.get(lemma).map(|&i| self.entries[i].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut vocabulary = Self::new();
        for (lemma, paradigm) in iter {
            vocabulary.push(lemma, paradigm);
        }
        vocabulary
    }
}
