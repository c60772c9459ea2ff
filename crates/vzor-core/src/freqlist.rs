use std::io::{self, BufRead};

use serde::{Deserialize, Serialize};

use crate::segment::{BoundaryFormat, SegmentedWord};

/// Field order of a whitespace-separated frequency list.
///
/// The order differs between pipeline stages, so it is always declared by the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreqListLayout {
    /// `word frequency`
    WordFreq,
    /// `word lemma frequency`
    WordLemmaFreq,
    /// `segmentation word frequency`, keyed by the case-marked segmentation
    SegmentedWordFreq(BoundaryFormat),
    /// `paradigm word frequency`, keyed by the paradigm id
    ParadigmWordFreq,
}

/// One parsed frequency-list line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqRow {
    /// Field the list is sorted and bucketed on
    pub key: String,
    pub word: String,
    pub frequency: u64,
}

impl FreqRow {
    /// Lower-cased first letter of the key
    pub fn bucket_letter(&self) -> Option<char> {
        self.key.chars().next().and_then(|c| c.to_lowercase().next())
    }
}

impl FreqListLayout {
    /// Parse one line, `None` when fields are missing or the frequency is not
    /// a number
    pub fn parse_row(&self, line: &str) -> Option<FreqRow> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let first = *fields.first()?;

        let (key, word, frequency) = match self {
            FreqListLayout::WordFreq => (first.to_string(), first, *fields.get(1)?),
            FreqListLayout::WordLemmaFreq => (first.to_string(), first, *fields.get(2)?),
            FreqListLayout::SegmentedWordFreq(format) => (
                SegmentedWord::parse(first, *format).format(BoundaryFormat::CaseMarked),
                *fields.get(1)?,
                *fields.get(2)?,
            ),
            FreqListLayout::ParadigmWordFreq => (first.to_string(), *fields.get(1)?, *fields.get(2)?),
        };

        Some(FreqRow {
            key,
            word: word.to_string(),
            frequency: parse_frequency(frequency)?,
        })
    }
}

/// Integer counts, or the float counts written by older filtering scripts
fn parse_frequency(field: &str) -> Option<u64> {
    field.parse::<u64>().ok().or_else(|| {
        field
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f.round() as u64)
    })
}

/// Iterate over the parsable rows of a frequency list. Unparsable lines are
/// skipped, read errors are passed through.
pub fn read_rows<R: BufRead>(
    reader: R,
    layout: FreqListLayout,
) -> impl Iterator<Item = io::Result<FreqRow>> {
    reader
        .lines()
        .enumerate()
        .filter_map(move |(index, line)| match line {
            Err(e) => Some(Err(e)),
            Ok(line) => {
                let row = layout.parse_row(&line);
                if row.is_none() && !line.trim().is_empty() {
                    tracing::debug!("Skipping frequency list line {}: {:?}", index + 1, line);
                }
                row.map(Ok)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_pick_their_fields() {
        let row = FreqListLayout::WordLemmaFreq.parse_row("kočky kočka 45").unwrap();
        assert_eq!((row.key.as_str(), row.word.as_str(), row.frequency), ("kočky", "kočky", 45));

        let row = FreqListLayout::ParadigmWordFreq.parse_row("žena\tženy\t12.0").unwrap();
        assert_eq!((row.key.as_str(), row.word.as_str(), row.frequency), ("žena", "ženy", 12));

        let row = FreqListLayout::WordFreq.parse_row("Kočka 3").unwrap();
        assert_eq!(row.bucket_letter(), Some('k'));
    }

    #[test]
    fn segmented_rows_are_keyed_case_marked() {
        let layout = FreqListLayout::SegmentedWordFreq(BoundaryFormat::EqualsJoined);
        let row = layout.parse_row("koč=ka kočka 120").unwrap();
        assert_eq!(row.key, "kočKa");
        assert_eq!(row.word, "kočka");
    }

    #[test]
    fn short_or_non_numeric_rows_are_skipped() {
        let input = "kočka 120\nkočky\nkočce many\n\nkočkou 7\n";
        let rows: Vec<FreqRow> = read_rows(input.as_bytes(), FreqListLayout::WordFreq)
            .collect::<io::Result<_>>()
            .unwrap();
        let words: Vec<&str> = rows.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["kočka", "kočkou"]);
    }
}
