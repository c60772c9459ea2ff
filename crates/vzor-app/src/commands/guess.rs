use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;
use vzor_config::Config;
use vzor_core::{FreqRow, RankedParadigm, Segmenter, freqlist::read_rows};
use vzor_morph::{FormIndex, MorphDatabase};
use vzor_trie::FreqSource;

use crate::commands::{load_database, load_segmenter, open_output};
use crate::guesser::{Guesser, Strategy};

#[derive(clap::Args, Debug)]
pub struct Args {
    #[arg(short, long, value_enum, default_value_t = Strategy::Trie)]
    strategy: Strategy,

    /// Write one JSON object per word
    #[arg(long)]
    json: bool,

    /// Paradigms printed per word, overrides the config
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Output file, stdout by default
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct GuessLine<'a> {
    pub word: &'a str,
    pub frequency: u64,
    pub guesses: &'a [RankedParadigm],
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct GuessStats {
    pub guessed: usize,
    pub rare: usize,
    pub known: usize,
    pub unmatched: usize,
}

pub fn run(args: Args, config: &Config) -> anyhow::Result<()> {
    let db = load_database(config)?;
    let segmenter = load_segmenter(config)?;
    let source = PathBuf::from(&config.data.frequency_list);
    let reader = source.open()?;

    let mut guesser = Guesser::new(args.strategy, config, &db, source.clone());
    let mut out = open_output(args.output.as_ref())?;
    let top = args.top.unwrap_or(config.guess.top_guesses);

    let stats = guess_rows(
        &db,
        &db.form_index(),
        segmenter.as_ref(),
        &mut guesser,
        read_rows(reader, config.data.frequency_layout),
        config.guess.min_frequency,
        |row, ranking| write_guesses(&mut out, row, &ranking[..ranking.len().min(top)], args.json),
    )?;
    out.flush()?;

    tracing::info!(
        "Guessed {} words ({} below minimum frequency, {} already known, {} without a guess)",
        stats.guessed,
        stats.rare,
        stats.known,
        stats.unmatched
    );
    Ok(())
}

/// Rank every rare-enough unknown word of a sorted list, handing each
/// non-empty ranking to `emit`
pub fn guess_rows<S, I, F>(
    db: &MorphDatabase,
    known: &FormIndex,
    segmenter: &dyn Segmenter,
    guesser: &mut Guesser<S>,
    rows: I,
    min_frequency: u64,
    mut emit: F,
) -> anyhow::Result<GuessStats>
where
    S: FreqSource,
    I: Iterator<Item = io::Result<FreqRow>>,
    F: FnMut(&FreqRow, &[RankedParadigm]) -> io::Result<()>,
{
    let mut stats = GuessStats::default();

    for row in rows {
        let row = row?;
        if row.frequency < min_frequency {
            stats.rare += 1;
            continue;
        }
        if known.form_present(db, &row.word) {
            stats.known += 1;
            continue;
        }

        let word = guesser.segment(segmenter, &row);
        guesser.enter_bucket(&word)?;
        let ranking = guesser.guess(db, &word);
        if ranking.is_empty() {
            tracing::debug!("No guess for {}", row.word);
            stats.unmatched += 1;
            continue;
        }

        emit(&row, &ranking)?;
        stats.guessed += 1;
    }

    Ok(stats)
}

pub fn write_guesses<W: Write>(
    out: &mut W,
    row: &FreqRow,
    ranking: &[RankedParadigm],
    json: bool,
) -> io::Result<()> {
    if json {
        let line = GuessLine {
            word: &row.word,
            frequency: row.frequency,
            guesses: ranking,
        };
        serde_json::to_writer(&mut *out, &line)?;
        return writeln!(out);
    }

    let guesses: Vec<String> = ranking
        .iter()
        .map(|r| format!("{} ({:.3})", r.paradigm, r.score))
        .collect();
    writeln!(out, "{}: {}", row.word, guesses.join(", "))
}
