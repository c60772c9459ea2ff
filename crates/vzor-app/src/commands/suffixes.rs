use std::io::Write;
use std::path::PathBuf;

use vzor_config::Config;
use vzor_morph::Vocabulary;
use vzor_topk::most_common_suffixes;

use crate::commands::{load_database, open_output};

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Number of suffixes, overrides the config
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Output file, stdout by default
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: Args, config: &Config) -> anyhow::Result<()> {
    let db = load_database(config)?;
    let size = args.size.unwrap_or(config.guess.common_suffixes);
    let mut out = open_output(args.output.as_ref())?;

    for suffix in lemma_suffixes(db.vocabulary(), size) {
        writeln!(out, "{suffix}")?;
    }
    out.flush()?;
    Ok(())
}

/// Most common suffixes of the lower-cased dictionary lemmas
pub fn lemma_suffixes(vocabulary: &Vocabulary, size: usize) -> Vec<String> {
    let lemmas = vocabulary.unique().map(|(lemma, _)| lemma.to_lowercase());
    most_common_suffixes(lemmas, size)
}
