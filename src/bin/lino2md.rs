//! Lino to Markdown Converter
//!
//! Converts a Links Notation statistics report (as written by
//! `sort-stats analyze --format lino` or `--save-lino`) to Markdown.
//!
//! Usage:
//!   lino2md input.lino [output.md] [--precision N]
//!
//! If output is not specified, prints to stdout.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sort_stats::config::DEFAULT_PRECISION;
use sort_stats::lino_report::parse_lino_report;

#[derive(Debug, Parser)]
#[command(name = "lino2md", about = "Convert a Links Notation statistics report to Markdown")]
struct Args {
    /// Path to the Links Notation report file
    input: PathBuf,
    /// Optional output path (prints to stdout if not specified)
    output: Option<PathBuf>,
    /// Fractional digits for floating point statistics
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("error reading input file {}", args.input.display()))?;

    let report = parse_lino_report(&content).with_context(|| {
        format!(
            "could not parse the Links Notation report in {}; make sure it contains a complete statistics report",
            args.input.display()
        )
    })?;

    let markdown = report.to_markdown_table(args.precision);

    match &args.output {
        Some(path) => {
            fs::write(path, &markdown)
                .with_context(|| format!("error writing output file {}", path.display()))?;
            println!("Markdown report written to: {}", path.display());
        }
        None => print!("{}", markdown),
    }

    Ok(())
}
