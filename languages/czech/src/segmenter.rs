use std::collections::HashMap;
use std::io::BufRead;

use vzor_core::{BoundaryFormat, Result, SegmentedWord, Segmenter};

/// Per-character baseline
pub struct CharSegmenter;

impl Segmenter for CharSegmenter {
    fn segment(&self, word: &str) -> Vec<String> {
        word.chars().map(String::from).collect()
    }
}

/// Segmentations precomputed by an external model, one `koč=ka` per line.
/// Words missing from the list stay in one piece.
#[derive(Debug, Clone, Default)]
pub struct LookupSegmenter {
    segmentations: HashMap<String, Vec<String>>,
}

impl LookupSegmenter {
    /// Read the first whitespace-separated field of each line as an
    /// `=`-joined segmentation
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut segmentations = HashMap::new();
        for line in reader.lines() {
            let line = line?;
            let Some(field) = line.split_whitespace().next() else {
                continue;
            };
            let word = SegmentedWord::parse(field, BoundaryFormat::EqualsJoined);
            if !word.is_empty() {
                segmentations.insert(word.surface(), word.pieces().to_vec());
            }
        }
        tracing::debug!("Read {} segmentations", segmentations.len());
        Ok(Self { segmentations })
    }

    pub fn len(&self) -> usize {
        self.segmentations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segmentations.is_empty()
    }
}

impl Segmenter for LookupSegmenter {
    fn segment(&self, word: &str) -> Vec<String> {
        self.segmentations
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_else(|| vec![word.to_string()])
    }
}
