//! Integer Sorting and Descriptive Statistics
//!
//! Sorts bounded integer sequences with one of several in-place algorithms
//! and summarizes them:
//! - **Exchange sort**: O(n²) adjacent-swap sort
//! - **Partition sort**: quicksort with a last-element pivot and an explicit work stack
//! - **Parallel sort**: partition sort with the two sides forked onto rayon
//!
//! The statistics engine computes mean, population or sample variance,
//! standard deviation, min, max, range, median and quartiles, reporting empty
//! or undersized input as an error rather than a sentinel value.

pub mod bench;
pub mod config;
pub mod exchange_sort;
pub mod input;
pub mod lino_report;
pub mod parallel_sort;
pub mod partition_sort;
pub mod sequence;
pub mod sorter;
pub mod stats;

pub use sequence::{CapacityExceeded, Sequence};
pub use sorter::{is_sorted, SortAlgorithm};
pub use stats::{
    compute_statistics, compute_statistics_with, statistics_from_sorted, Statistics, StatsError,
    VarianceMode,
};
