use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod config;
pub mod guesser;


use self::commands::{evaluate, forms, guess, suffixes, test};

#[derive(Parser, Debug)]
#[command(name = "vzor", version, about = "Guess inflectional paradigms of unknown Czech words")]
struct Cli {
    /// JSON configuration file; `VZOR_*` environment variables are used without one
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Guess paradigms for the unknown words of the frequency list
    Guess(guess::Args),
    /// Guess every lemma of a held-out dictionary and write an evaluation log
    Test(test::Args),
    /// Report precision of evaluation logs
    Evaluate(evaluate::Args),
    /// Write every form generated by the dictionary
    Forms(forms::Args),
    /// Print the most common lemma suffixes
    Suffixes(suffixes::Args),
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Guess(args) => guess::run(args, &config),
        Command::Test(args) => test::run(args, &config),
        Command::Evaluate(args) => evaluate::run(args, &config),
        Command::Forms(args) => forms::run(args, &config),
        Command::Suffixes(args) => suffixes::run(args, &config),
    }
}
