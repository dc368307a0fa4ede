// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Driver binary: compute the n-th smooth number over a prime basis.
//!
//! With no arguments this reproduces the reference behaviour: the
//! 1,000,000th positive integer with no prime factor greater than 20,
//! printed with its factorization and the wall-clock time taken.
//!
//! Logging goes to stderr (controlled by `RUST_LOG`); stdout carries only
//! the result block.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use smooth_search::basis::DEFAULT_PRIMES;
use smooth_search::{report, EnumeratorError, PrimeBasis, SmoothEnumerator};

#[derive(Parser)]
#[command(name = "smooth")]
#[command(about = "Compute the n-th smooth number over a fixed prime basis", long_about = None)]
struct Cli {
    /// Rank of the number to compute (1-indexed)
    #[arg(short = 'n', long, default_value_t = 1_000_000)]
    count: u64,

    /// Comma-separated prime basis
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_PRIMES)]
    primes: Vec<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), EnumeratorError> {
    let basis = PrimeBasis::new(cli.primes.clone())?;
    let mut enumerator = SmoothEnumerator::new(basis);

    println!("Beginning calculation...");

    let start = Instant::now();
    let number = enumerator.nth(cli.count)?;
    let elapsed = start.elapsed();

    println!("The {} number is:", report::ordinal(cli.count));
    println!("{}", number.value());
    println!(
        "({})",
        report::factorization(enumerator.basis(), number.exponents())
    );
    println!("{} milliseconds", elapsed.as_millis());

    Ok(())
}
