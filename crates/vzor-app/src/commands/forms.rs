use std::io::Write;
use std::path::PathBuf;

use vzor_config::Config;
use vzor_morph::MorphDatabase;

use crate::commands::{load_database, open_output};

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Output file, stdout by default
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: Args, config: &Config) -> anyhow::Result<()> {
    let db = load_database(config)?;
    let mut out = open_output(args.output.as_ref())?;
    let written = write_forms(&db, &mut out)?;
    out.flush()?;
    tracing::info!("Wrote {} forms", written);
    Ok(())
}

/// `form:lemma:paradigm` for every form of every dictionary lemma
pub fn write_forms<W: Write>(db: &MorphDatabase, out: &mut W) -> std::io::Result<usize> {
    let mut written = 0;
    for (form, lemma, paradigm) in db.all_forms() {
        writeln!(out, "{form}:{lemma}:{paradigm}")?;
        written += 1;
    }
    Ok(written)
}
