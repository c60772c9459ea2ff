use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use vzor_config::Config;
use vzor_core::{SegmentedWord, Segmenter};
use vzor_lang_czech::CzechPreprocessor;
use vzor_morph::{MorphDatabase, Vocabulary};
use vzor_trie::FreqSource;

use crate::commands::{load_database, load_segmenter, open_output};
use crate::guesser::{Guesser, Strategy};

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Held-out dictionary (`lemma:paradigm` lines)
    dictionary: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Strategy::Trie)]
    strategy: Strategy,

    /// Log file, stdout by default
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: Args, config: &Config) -> anyhow::Result<()> {
    let mut db = load_database(config)?;
    let segmenter = load_segmenter(config)?;

    let file = File::open(&args.dictionary)
        .with_context(|| format!("cannot open {}", args.dictionary.display()))?;
    let held_out = Vocabulary::parse(
        BufReader::new(file),
        &args.dictionary.display().to_string(),
        &CzechPreprocessor,
    )?;

    let source = PathBuf::from(&config.data.frequency_list);
    let mut guesser = Guesser::new(args.strategy, config, &db, source);
    let mut out = open_output(args.output.as_ref())?;

    let tested = write_test_log(
        &mut db,
        &held_out,
        segmenter.as_ref(),
        &mut guesser,
        config.guess.top_guesses,
        &mut out,
    )?;
    out.flush()?;

    tracing::info!("Tested {} held-out lemmas", tested);
    Ok(())
}

/// Guess each held-out lemma with its own forms removed from its paradigm's
/// spread, writing `lemma:paradigm` and then the comma-separated guesses.
///
/// Lemmas are visited by first letter so each trie bucket is built once.
pub fn write_test_log<S, W>(
    db: &mut MorphDatabase,
    held_out: &Vocabulary,
    segmenter: &dyn Segmenter,
    guesser: &mut Guesser<S>,
    top: usize,
    out: &mut W,
) -> anyhow::Result<usize>
where
    S: FreqSource,
    W: Write,
{
    let mut entries: Vec<&(String, String)> = held_out.entries().iter().collect();
    entries.sort_by_key(|(lemma, _)| lemma.chars().next().and_then(|c| c.to_lowercase().next()));

    for (lemma, paradigm) in &entries {
        let word = SegmentedWord::from_pieces(segmenter.segment(lemma));
        guesser.enter_bucket(&word)?;

        let guesser = &*guesser;
        let ranking = db.with_form_excluded(
            paradigm,
            lemma,
            |form| guesser.frequency_of(form),
            |db| guesser.guess(db, &word),
        );

        let guesses: Vec<&str> = ranking.iter().take(top).map(|r| r.paradigm.as_str()).collect();
        writeln!(out, "{lemma}:{paradigm}")?;
        writeln!(out, "{}", guesses.join(", "))?;
    }

    Ok(entries.len())
}
