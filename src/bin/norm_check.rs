// Conformance runner: normalizes every `form,norm` pair of a CSV file and
// reports the mismatches.
// Run with: cargo run --bin norm_check -- tests/data/words.csv
use clap::Parser;
use crossterm::style::Stylize;
use norm_core::{conformance, Normalizer};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "norm_check", version, about = "Check norms against a reference dataset")]
struct Cli {
    /// Two-column `form,norm` CSV without header
    cases: PathBuf,

    /// Known-word list; defaults to the bundled one
    #[arg(long)]
    dictionary: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = match &cli.dictionary {
        Some(path) => Normalizer::from_dictionary_file(path),
        None => Ok(Normalizer::bundled()),
    };
    let cases = engine.and_then(|engine| Ok((engine, conformance::read_cases_from_path(&cli.cases)?)));
    let (mut engine, cases) = match cases {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            process::exit(2);
        }
    };

    let mismatches = conformance::run(&mut engine, &cases);
    for m in &mismatches {
        println!("{} {}", "FAIL".red().bold(), m);
    }

    let passed = cases.len() - mismatches.len();
    let summary = format!("{}/{} forms normalized as expected", passed, cases.len());
    if mismatches.is_empty() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.yellow());
        process::exit(1);
    }
}
