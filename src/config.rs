//! Command line and analysis configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::sequence::DEFAULT_CAPACITY;
use crate::sorter::SortAlgorithm;
use crate::stats::VarianceMode;

/// Default fractional digits in rendered reports
pub const DEFAULT_PRECISION: usize = 4;

/// Array sizes timed by the `bench` subcommand when none are given
pub const DEFAULT_BENCH_SIZES: [usize; 6] = [
    1 << 8,  // 256
    1 << 10, // 1K
    1 << 12, // 4K
    1 << 14, // 16K
    1 << 16, // 64K
    1 << 20, // 1M
];

/// Largest array the quadratic exchange sort is timed on by default
pub const DEFAULT_EXCHANGE_LIMIT: usize = 1 << 14;

#[derive(Debug, Parser)]
#[command(
    name = "sort-stats",
    version,
    about = "Sort integer sequences and report descriptive statistics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read integers and print their sorted order and statistics
    Analyze(AnalyzeArgs),
    /// Time every sort algorithm on random data
    Bench(BenchArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// File to read integers from (stdin when omitted)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = SortAlgorithm::Partition)]
    pub algorithm: SortAlgorithm,

    #[arg(long, value_enum, default_value_t = VarianceMode::Population)]
    pub variance: VarianceMode,

    /// Maximum number of integers accepted
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// What to do with integers beyond the capacity
    #[arg(long, value_enum, default_value_t = OverflowPolicy::Reject)]
    pub overflow: OverflowPolicy,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fractional digits for floating point statistics
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,

    /// Also write the report in Links Notation to this path
    #[arg(long)]
    pub save_lino: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct BenchArgs {
    /// Array sizes to time (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub sizes: Vec<usize>,

    /// Skip exchange sort for arrays larger than this
    #[arg(long, default_value_t = DEFAULT_EXCHANGE_LIMIT)]
    pub exchange_limit: usize,
}

impl BenchArgs {
    pub fn sizes(&self) -> Vec<usize> {
        if self.sizes.is_empty() {
            DEFAULT_BENCH_SIZES.to_vec()
        } else {
            self.sizes.clone()
        }
    }
}

/// Handling of input beyond the sequence capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OverflowPolicy {
    /// Fail the whole read
    #[default]
    Reject,
    /// Keep the first `capacity` values and report how many were dropped
    Truncate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Lino,
    Markdown,
}

/// Settings consumed by ingestion and analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub capacity: usize,
    pub overflow: OverflowPolicy,
    pub algorithm: SortAlgorithm,
    pub variance: VarianceMode,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            capacity: DEFAULT_CAPACITY,
            overflow: OverflowPolicy::default(),
            algorithm: SortAlgorithm::default(),
            variance: VarianceMode::default(),
        }
    }
}

impl From<&AnalyzeArgs> for AnalysisConfig {
    fn from(args: &AnalyzeArgs) -> Self {
        AnalysisConfig {
            capacity: args.capacity,
            overflow: args.overflow,
            algorithm: args.algorithm,
            variance: args.variance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::parse_from(["sort-stats", "analyze"]);
        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze subcommand");
        };
        assert_eq!(AnalysisConfig::from(&args), AnalysisConfig::default());
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.precision, DEFAULT_PRECISION);
        assert!(args.input.is_none());
    }

    #[test]
    fn test_analyze_options() {
        let cli = Cli::parse_from([
            "sort-stats",
            "analyze",
            "--input",
            "data.txt",
            "--algorithm",
            "exchange",
            "--variance",
            "sample",
            "--capacity",
            "100",
            "--overflow",
            "truncate",
            "--format",
            "lino",
            "--precision",
            "8",
        ]);
        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze subcommand");
        };
        let config = AnalysisConfig::from(&args);
        assert_eq!(config.algorithm, SortAlgorithm::Exchange);
        assert_eq!(config.variance, VarianceMode::Sample);
        assert_eq!(config.capacity, 100);
        assert_eq!(config.overflow, OverflowPolicy::Truncate);
        assert_eq!(args.format, OutputFormat::Lino);
        assert_eq!(args.precision, 8);
        assert_eq!(args.input, Some(PathBuf::from("data.txt")));
    }

    #[test]
    fn test_bench_sizes() {
        let cli = Cli::parse_from(["sort-stats", "bench", "--sizes", "10,100,1000"]);
        let Command::Bench(args) = cli.command else {
            panic!("expected bench subcommand");
        };
        assert_eq!(args.sizes(), vec![10, 100, 1000]);

        let cli = Cli::parse_from(["sort-stats", "bench"]);
        let Command::Bench(args) = cli.command else {
            panic!("expected bench subcommand");
        };
        assert_eq!(args.sizes(), DEFAULT_BENCH_SIZES.to_vec());
        assert_eq!(args.exchange_limit, DEFAULT_EXCHANGE_LIMIT);
    }

    #[test]
    fn test_rejects_unknown_algorithm() {
        let result = Cli::try_parse_from(["sort-stats", "analyze", "--algorithm", "bitonic"]);
        assert!(result.is_err());
    }
}
