use serde::{Deserialize, Serialize};

/// Marker SentencePiece puts in front of word-initial pieces
const WORD_START: char = '\u{2581}';

/// Wire format of a segmented word. The two formats are never guessed from the
/// text: whoever reads a segmentation has to say which one it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryFormat {
    /// `kočKa`: every piece after the first starts with an upper-case letter
    CaseMarked,
    /// `koč=ka`
    EqualsJoined,
}

/// A word split into ordered, lower-cased sub-word pieces
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegmentedWord {
    pieces: Vec<String>,
}

impl SegmentedWord {
    /// Build from segmenter output. Pieces are lower-cased, SentencePiece
    /// word-start markers are removed and empty pieces dropped.
    pub fn from_pieces<I, S>(pieces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pieces = pieces
            .into_iter()
            .map(|piece| {
                piece
                    .as_ref()
                    .chars()
                    .filter(|&c| c != WORD_START)
                    .flat_map(char::to_lowercase)
                    .collect::<String>()
            })
            .filter(|piece| !piece.is_empty())
            .collect();

        Self { pieces }
    }

    /// Read a segmentation written in the given format
    pub fn parse(text: &str, format: BoundaryFormat) -> Self {
        match format {
            BoundaryFormat::EqualsJoined => Self::from_pieces(text.split('=')),
            BoundaryFormat::CaseMarked => {
                let mut pieces = Vec::new();
                let mut current = String::new();
                for ch in text.chars() {
                    if ch.is_uppercase() && !current.is_empty() {
                        pieces.push(std::mem::take(&mut current));
                    }
                    current.push(ch);
                }
                if !current.is_empty() {
                    pieces.push(current);
                }
                Self::from_pieces(pieces)
            }
        }
    }

    /// Write the segmentation in the given format
    pub fn format(&self, format: BoundaryFormat) -> String {
        match format {
            BoundaryFormat::EqualsJoined => self.pieces.join("="),
            BoundaryFormat::CaseMarked => {
                let mut out = String::new();
                for (i, piece) in self.pieces.iter().enumerate() {
                    if i == 0 {
                        out.push_str(piece);
                        continue;
                    }
                    let mut chars = piece.chars();
                    if let Some(first) = chars.next() {
                        out.extend(first.to_uppercase());
                        out.push_str(chars.as_str());
                    }
                }
                out
            }
        }
    }

    pub fn pieces(&self) -> &[String] {
        &self.pieces
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The unsegmented, lower-cased word
    pub fn surface(&self) -> String {
        self.pieces.concat()
    }

    pub fn char_len(&self) -> usize {
        self.pieces.iter().map(|p| p.chars().count()).sum()
    }

    /// Letter whose trie bucket this word belongs to
    pub fn first_letter(&self) -> Option<char> {
        self.pieces.first().and_then(|p| p.chars().next())
    }

    /// Char offsets into the surface where a piece after the first begins
    pub fn boundaries(&self) -> Vec<usize> {
        let mut offsets = Vec::with_capacity(self.pieces.len().saturating_sub(1));
        let mut offset = 0;
        for (i, piece) in self.pieces.iter().enumerate() {
            if i > 0 {
                offsets.push(offset);
            }
            offset += piece.chars().count();
        }
        offsets
    }

    /// Suffixes made of the last 1, 2, ... pieces, shortest first
    pub fn piece_suffixes(&self) -> Vec<String> {
        (1..=self.pieces.len())
            .map(|n| self.pieces[self.pieces.len() - n..].concat())
            .collect()
    }
}
