use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use vzor_config::Config;
use vzor_morph::{MorphDatabase, SameParadigmCriterion};

use crate::commands::{load_database, open_output};

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Logs written by the `test` command
    #[arg(required = true)]
    logs: Vec<PathBuf>,

    /// Evaluate the 1 to n best guesses
    #[arg(short = 'n', long, default_value_t = 5)]
    top_n: usize,

    /// Shared affixes needed by the common_forms criterion
    #[arg(short, long, default_value_t = 5)]
    threshold: usize,

    /// Report file, stdout by default
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// One tested lemma of an evaluation log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub lemma: String,
    pub paradigm: String,
    pub guesses: Vec<String>,
}

pub fn run(args: Args, config: &Config) -> anyhow::Result<()> {
    let db = load_database(config)?;
    let mut out = open_output(args.output.as_ref())?;

    for path in &args.logs {
        let file = File::open(path).with_context(|| format!("cannot open log {}", path.display()))?;
        let entries = parse_log(BufReader::new(file))?;
        let name = path.display().to_string();
        write_report(&mut out, &name, &entries, &db, args.top_n, args.threshold)?;
    }

    out.flush()?;
    Ok(())
}

/// Read `lemma:paradigm` / `guess, guess` line pairs. A missing guess line
/// counts as no guesses.
pub fn parse_log<R: BufRead>(reader: R) -> std::io::Result<Vec<LogEntry>> {
    let mut entries = Vec::new();
    let mut lines = reader.lines();

    while let Some(header) = lines.next() {
        let header = header?;
        if header.trim().is_empty() {
            continue;
        }
        let guesses = lines.next().transpose()?.unwrap_or_default();

        let header = header.trim();
        let lemma = header.split(':').next().unwrap_or_default();
        let paradigm = header.rsplit(':').next().unwrap_or_default();
        entries.push(LogEntry {
            lemma: lemma.to_string(),
            paradigm: paradigm.to_string(),
            guesses: guesses
                .trim()
                .split(", ")
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect(),
        });
    }

    Ok(entries)
}

/// Entries whose paradigm is among the first 1, 2, ..., `top_n` guesses
pub fn top_n_hits(entries: &[LogEntry], top_n: usize) -> Vec<usize> {
    let mut hits = vec![0; top_n];
    for entry in entries {
        if let Some(rank) = entry.guesses.iter().take(top_n).position(|g| *g == entry.paradigm) {
            for hit in &mut hits[rank..] {
                *hit += 1;
            }
        }
    }
    hits
}

/// Entries whose first guess matches the paradigm under `criterion`
pub fn criterion_hits(
    entries: &[LogEntry],
    db: &MorphDatabase,
    criterion: SameParadigmCriterion,
    threshold: usize,
) -> usize {
    entries
        .iter()
        .filter(|entry| {
            entry
                .guesses
                .first()
                .is_some_and(|guess| db.same_paradigms(guess, &entry.paradigm, criterion, threshold))
        })
        .count()
}

/// Entries whose first guess inflects the lemma into the same forms
pub fn same_lemma_hits(entries: &[LogEntry], db: &MorphDatabase) -> usize {
    entries
        .iter()
        .filter(|entry| {
            entry
                .guesses
                .first()
                .is_some_and(|guess| db.same_lemma(&entry.lemma, guess, &entry.paradigm))
        })
        .count()
}

fn ratio(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

pub fn write_report<W: Write>(
    out: &mut W,
    name: &str,
    entries: &[LogEntry],
    db: &MorphDatabase,
    top_n: usize,
    threshold: usize,
) -> std::io::Result<()> {
    let total = entries.len();
    let guesses: usize = entries.iter().map(|e| e.guesses.len()).sum();
    writeln!(
        out,
        "{name}: {total} examples, {:.3} guesses at average",
        ratio(guesses, total)
    )?;

    for (i, hits) in top_n_hits(entries, top_n).into_iter().enumerate() {
        writeln!(
            out,
            "\tsame_paradigms_top_{}: {hits} (precision {:.3})",
            i + 1,
            ratio(hits, total)
        )?;
    }

    for criterion in [
        SameParadigmCriterion::SameAffixes,
        SameParadigmCriterion::CommonForms,
        SameParadigmCriterion::CommonTags,
    ] {
        let hits = criterion_hits(entries, db, criterion, threshold);
        let label = match criterion {
            SameParadigmCriterion::CommonForms => format!("{}_{threshold}", criterion.name()),
            _ => criterion.name().to_string(),
        };
        writeln!(out, "\t{label}: {hits} (precision {:.3})", ratio(hits, total))?;
    }

    let hits = same_lemma_hits(entries, db);
    writeln!(out, "\tsame_lemma: {hits} (precision {:.3})", ratio(hits, total))
}
