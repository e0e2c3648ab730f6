use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use smtcalc::{
    interpreter::{
        evaluator::core::{Context, OverflowMode},
        generator::{Generator, GeneratorConfig},
        output::Numeral,
    },
    solve_source,
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// smtcalc evaluates integer arithmetic written in SMT-LIB prefix notation,
/// one formula per line. Without an input file it generates random formulas
/// and evaluates those instead.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File with one formula per line. When omitted, formulas are generated.
    file: Option<PathBuf>,

    /// Number of formulas to generate when no file is given.
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// Where generated formulas are written before they are evaluated.
    #[arg(long, default_value = "fuzz.txt")]
    fuzz_file: PathBuf,

    /// Seed for the formula generator, for reproducible runs.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Report integer overflow as an error instead of wrapping around.
    #[arg(long)]
    checked: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let path = match &args.file {
        Some(path) => path.clone(),
        None => match write_fuzz_file(&args) {
            Ok(()) => args.fuzz_file.clone(),
            Err(e) => {
                eprintln!("Failed to write generated formulas to '{}': {e}",
                          args.fuzz_file.display());
                return ExitCode::FAILURE;
            },
        },
    };

    let Ok(source) = read_source(&path) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        return ExitCode::FAILURE;
    };

    let overflow = if args.checked { OverflowMode::Checked } else { OverflowMode::Wrapping };
    let context = Context::with_overflow(overflow);

    for outcome in solve_source(&source, &context) {
        match outcome.result {
            Ok(value) => println!("{}", Numeral(value)),
            Err(e) => {
                warn!(line = outcome.line, column = e.offset() + 1, "formula failed");
                eprintln!("Error on line {}: {e}", outcome.line);
            },
        }
    }

    ExitCode::SUCCESS
}

/// Generates `args.count` formulas into `args.fuzz_file`.
fn write_fuzz_file(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = GeneratorConfig::default();
    let batch = match args.seed {
        Some(seed) => Generator::seeded(seed, config)?.generate_many(args.count),
        None => Generator::from_entropy(config)?.generate_many(args.count),
    };

    fs::write(&args.fuzz_file, batch)?;
    debug!(count = args.count, path = %args.fuzz_file.display(), "wrote generated formulas");

    Ok(())
}

/// Reads the input file, replacing invalid UTF-8 with `U+FFFD`.
///
/// The replacement character is not part of the notation, so the lexer drops
/// it like any other unknown character and only the affected line changes.
fn read_source(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
