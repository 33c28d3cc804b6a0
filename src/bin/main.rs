use clap::Parser;
use norm_core::{Config, Normalizer};
use std::error::Error;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Resolve French word forms to their norm.
///
/// Normalizes WORDS, or each whitespace-separated token read from stdin,
/// printing one line of norms per input line.
#[derive(Parser)]
#[command(name = "norm_engine", version, about, long_about = None)]
struct Cli {
    /// Known-word list used when no saved tables exist
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Directory holding the saved tables
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Persist the learned tables on exit
    #[arg(long)]
    save: bool,

    /// Words to normalize instead of reading stdin
    words: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("[ERROR] {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = Config::from_env()?;
    if cli.dictionary.is_some() {
        config.dictionary = cli.dictionary;
    }
    if let Some(dir) = cli.tables {
        config.tables_dir = dir;
    }

    let mut engine = Normalizer::open(&config)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.words.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let norms = engine.normalize_batch(line.split_whitespace());
            writeln!(out, "{}", norms.join(" "))?;
        }
    } else {
        for norm in engine.normalize_batch(&cli.words) {
            writeln!(out, "{}", norm)?;
        }
    }
    out.flush()?;

    if cli.save {
        engine.save(&config.tables_dir)?;
        eprintln!("Tables saved to '{}'", config.tables_dir.display());
    }
    Ok(())
}
