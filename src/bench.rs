//! Timing comparison of the sort algorithms on random data.

use std::time::Instant;

use rand::Rng;
use tracing::info;

use crate::sorter::{is_sorted, SortAlgorithm};

/// Outcome of timing one algorithm at one array size
#[derive(Debug, Clone, PartialEq)]
pub enum Timing {
    /// Sorted correctly in this many milliseconds
    Ok(f64),
    /// Output was not sorted or disagreed with the reference
    Failed,
    /// Not run at this size
    Skipped,
}

impl Timing {
    fn cell(&self) -> String {
        match self {
            Timing::Ok(ms) => format!("{:.3}", ms),
            Timing::Failed => "ERROR".to_string(),
            Timing::Skipped => "N/A".to_string(),
        }
    }
}

/// One row of the benchmark table
#[derive(Debug, Clone)]
pub struct BenchRow {
    pub size: usize,
    /// Timings in [`SortAlgorithm::ALL`] order
    pub timings: Vec<(SortAlgorithm, Timing)>,
}

/// Generate random test data of given size
pub fn generate_random_data(size: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

/// Time every algorithm on one random array.
///
/// Each result is checked for order and compared against the standard
/// library's sort of the same data.
pub fn bench_size(size: usize, exchange_limit: usize) -> BenchRow {
    let data = generate_random_data(size);
    let mut expected = data.clone();
    expected.sort_unstable();

    let timings = SortAlgorithm::ALL
        .into_iter()
        .map(|algorithm| {
            if algorithm == SortAlgorithm::Exchange && size > exchange_limit {
                return (algorithm, Timing::Skipped);
            }

            let mut work = data.clone();
            let start = Instant::now();
            algorithm.apply(&mut work);
            let ms = start.elapsed().as_secs_f64() * 1000.0;

            if is_sorted(&work) && work == expected {
                (algorithm, Timing::Ok(ms))
            } else {
                (algorithm, Timing::Failed)
            }
        })
        .collect();

    BenchRow { size, timings }
}

/// Run benchmarks across multiple array sizes and render a table
pub fn run_benchmark(sizes: &[usize], exchange_limit: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:>12} | {:>14} | {:>14} | {:>14} | {:>16}\n",
        "Size", "Exchange (ms)", "Partition (ms)", "Parallel (ms)", "Parallel speedup"
    ));
    output.push_str(&format!(
        "{:-<12}-+-{:-<14}-+-{:-<14}-+-{:-<14}-+-{:-<16}\n",
        "", "", "", "", ""
    ));

    for &size in sizes {
        info!(size, "benchmarking");
        let row = bench_size(size, exchange_limit);

        let timing = |algorithm: SortAlgorithm| {
            row.timings
                .iter()
                .find(|(a, _)| *a == algorithm)
                .map(|(_, t)| t.clone())
                .unwrap_or(Timing::Skipped)
        };
        let exchange = timing(SortAlgorithm::Exchange);
        let partition = timing(SortAlgorithm::Partition);
        let parallel = timing(SortAlgorithm::Parallel);

        let speedup = match (&partition, &parallel) {
            (Timing::Ok(seq), Timing::Ok(par)) if *par > 0.0 => format!("{:.2}x", seq / par),
            _ => "N/A".to_string(),
        };

        output.push_str(&format!(
            "{:>12} | {:>14} | {:>14} | {:>14} | {:>16}\n",
            size,
            exchange.cell(),
            partition.cell(),
            parallel.cell(),
            speedup
        ));
    }

    output.push_str("\nNote: Speedup > 1.0x means the parallel sort beat the sequential partition sort\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_size_verifies_all_algorithms() {
        let row = bench_size(512, 1024);
        assert_eq!(row.size, 512);
        assert_eq!(row.timings.len(), SortAlgorithm::ALL.len());
        for (algorithm, timing) in &row.timings {
            assert!(
                matches!(timing, Timing::Ok(_)),
                "{} did not sort correctly",
                algorithm.name()
            );
        }
    }

    #[test]
    fn test_exchange_skipped_above_limit() {
        let row = bench_size(2048, 1000);
        let (_, exchange) = row
            .timings
            .iter()
            .find(|(a, _)| *a == SortAlgorithm::Exchange)
            .unwrap();
        assert_eq!(*exchange, Timing::Skipped);
    }

    #[test]
    fn test_run_benchmark_table() {
        let table = run_benchmark(&[16, 64], 32);
        assert!(table.contains("Exchange (ms)"));
        assert_eq!(table.lines().filter(|l| l.contains(" | ")).count(), 3);
        assert!(table.contains("N/A"));
        assert!(!table.contains("ERROR"));
    }

    #[test]
    fn test_generate_random_data() {
        assert_eq!(generate_random_data(100).len(), 100);
        assert!(generate_random_data(0).is_empty());
    }
}
