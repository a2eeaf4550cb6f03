//! Sort and Summarize Integer Sequences
//!
//! `sort-stats analyze` reads whitespace separated integers from a file or
//! stdin, sorts them with the selected algorithm and prints descriptive
//! statistics. `sort-stats bench` times every algorithm on random data.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sort_stats::bench;
use sort_stats::config::{AnalysisConfig, AnalyzeArgs, BenchArgs, Cli, Command, OutputFormat};
use sort_stats::input::read_sequence;
use sort_stats::lino_report::StatisticsReport;
use sort_stats::stats::statistics_from_sorted;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => analyze(&args),
        Command::Bench(args) => {
            run_bench(&args);
            Ok(())
        }
    }
}

fn analyze(args: &AnalyzeArgs) -> Result<()> {
    let config = AnalysisConfig::from(args);

    let (reader, source): (Box<dyn BufRead>, String) = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            (Box::new(BufReader::new(file)), path.display().to_string())
        }
        None => (Box::new(io::stdin().lock()), "stdin".to_string()),
    };

    let ingested = read_sequence(reader, &config)
        .with_context(|| format!("failed to read integers from {}", source))?;

    let mut sequence = ingested.sequence;
    let original = sequence.as_slice().to_vec();
    sequence.sort(config.algorithm);
    let sorted = sequence.into_vec();

    let statistics = statistics_from_sorted(&sorted, config.variance)
        .with_context(|| format!("cannot compute statistics for {}", source))?;

    let report = StatisticsReport::new(&source, config.algorithm, original, sorted, statistics)
        .with_dropped(ingested.dropped);

    match args.format {
        OutputFormat::Text => print!("{}", report.to_text(args.precision)),
        OutputFormat::Lino => print!("{}", report.to_lino()),
        OutputFormat::Markdown => print!("{}", report.to_markdown_table(args.precision)),
    }

    if let Some(path) = &args.save_lino {
        report
            .save_lino(path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!(path = %path.display(), "saved Links Notation report");
    }

    Ok(())
}

fn run_bench(args: &BenchArgs) {
    let sizes = args.sizes();
    println!("Sort Algorithm Benchmark");
    println!("========================\n");
    println!("Rayon threads: {}\n", rayon::current_num_threads());
    print!("{}", bench::run_benchmark(&sizes, args.exchange_limit));
}
