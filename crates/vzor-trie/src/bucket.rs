use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use vzor_core::{FreqListLayout, Result};

use crate::node::FreqTrie;

/// Something a sorted frequency list can be (re)read from
pub trait FreqSource {
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>>;

    fn describe(&self) -> String {
        "frequency list".to_string()
    }
}

impl FreqSource for PathBuf {
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(BufReader::new(File::open(self)?)))
    }

    fn describe(&self) -> String {
        self.display().to_string()
    }
}

/// Trie holding one first-letter bucket of a sorted list at a time
pub struct BucketedTrie<S: FreqSource> {
    source: S,
    layout: FreqListLayout,
    letter: Option<char>,
    trie: FreqTrie,
}

impl<S: FreqSource> BucketedTrie<S> {
    /// Empty until the first call to `rebuild_if_boundary_crossed`
    pub fn new(source: S, layout: FreqListLayout) -> Self {
        Self {
            source,
            layout,
            letter: None,
            trie: FreqTrie::new(),
        }
    }

    /// Switch to the bucket of `letter` unless it is already loaded. The old
    /// trie is dropped before the source is read again.
    pub fn rebuild_if_boundary_crossed(&mut self, letter: char) -> Result<bool> {
        let letter = letter.to_lowercase().next().unwrap_or(letter);
        if self.letter == Some(letter) {
            return Ok(false);
        }

        self.trie = FreqTrie::new();
        self.letter = None;

        let reader = self.source.open()?;
        self.trie = FreqTrie::from_bucket(reader, self.layout, letter)?;
        self.letter = Some(letter);

        tracing::info!(
            "Rebuilt trie for '{}' from {}: {} words",
            letter,
            self.source.describe(),
            self.trie.len()
        );
        Ok(true)
    }

    pub fn trie(&self) -> &FreqTrie {
        &self.trie
    }

    /// Letter of the loaded bucket
    pub fn letter(&self) -> Option<char> {
        self.letter
    }
}
