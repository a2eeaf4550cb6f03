//! Descriptive statistics over integer sequences.
//!
//! Every fallible statistic reports an explicit [`StatsError`] instead of a
//! sentinel value: an empty input yields [`StatsError::EmptyInput`] from each
//! function, and sample variance over a single value yields
//! [`StatsError::InsufficientSampleSize`].
//!
//! # Numeric policy
//!
//! - The sum is accumulated exactly in `i128`; mean and variance are `f64`.
//! - Variance is the two-pass sum of squared deviations divided by
//!   `count - ddof`.
//! - Round-off can push a variance a hair below zero; [`std_dev`] clamps it to
//!   zero before taking the square root.
//!
//! # Quartiles
//!
//! Q1 and Q3 are the medians of the lower and upper halves of the sorted data.
//! For an odd count the median element belongs to neither half:
//!
//! ```text
//! lower = sorted[..n / 2]
//! upper = sorted[(n + 1) / 2..]
//! ```
//!
//! A single value has two empty halves, so both quartiles equal that value.

use clap::ValueEnum;
use thiserror::Error;
use tracing::{debug, trace};

use crate::sorter::{is_sorted, SortAlgorithm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("no values to compute statistics over")]
    EmptyInput,
    #[error("variance with ddof={ddof} needs more than {ddof} values, got {count}")]
    InsufficientSampleSize { count: usize, ddof: usize },
}

pub type Result<T> = std::result::Result<T, StatsError>;

/// Denominator used for variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum VarianceMode {
    /// Divide by `n`
    #[default]
    Population,
    /// Divide by `n - 1` (Bessel's correction)
    Sample,
}

impl VarianceMode {
    /// Delta degrees of freedom subtracted from the count.
    pub fn ddof(self) -> usize {
        match self {
            VarianceMode::Population => 0,
            VarianceMode::Sample => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VarianceMode::Population => "population",
            VarianceMode::Sample => "sample",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "population" => Some(VarianceMode::Population),
            "sample" => Some(VarianceMode::Sample),
            _ => None,
        }
    }
}

/// Snapshot of every statistic for one sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub sum: i128,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub min: i64,
    pub max: i64,
    pub range: u64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    pub mode: VarianceMode,
}

impl Statistics {
    /// Interquartile range, `q3 - q1`.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Exact sum of all values.
pub fn sum(values: &[i64]) -> i128 {
    values.iter().map(|&x| x as i128).sum()
}

/// Arithmetic mean.
pub fn mean(values: &[i64]) -> Result<f64> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(sum(values) as f64 / values.len() as f64)
}

/// Sum of squared deviations from `mean` divided by `count - ddof`.
pub fn variance(values: &[i64], mean: f64, mode: VarianceMode) -> Result<f64> {
    let count = values.len();
    if count == 0 {
        return Err(StatsError::EmptyInput);
    }
    let ddof = mode.ddof();
    if count <= ddof {
        return Err(StatsError::InsufficientSampleSize { count, ddof });
    }

    let squared_deviations: f64 = values
        .iter()
        .map(|&x| {
            let d = x as f64 - mean;
            d * d
        })
        .sum();

    Ok(squared_deviations / (count - ddof) as f64)
}

/// Square root of a variance, clamping round-off negatives to zero.
pub fn std_dev(variance: f64) -> f64 {
    if variance < 0.0 {
        trace!(variance, "clamping negative variance to zero");
        return 0.0;
    }
    variance.sqrt()
}

pub fn min(values: &[i64]) -> Result<i64> {
    values.iter().copied().min().ok_or(StatsError::EmptyInput)
}

pub fn max(values: &[i64]) -> Result<i64> {
    values.iter().copied().max().ok_or(StatsError::EmptyInput)
}

/// `max - min`, widened so extreme `i64` inputs cannot overflow.
pub fn range(values: &[i64]) -> Result<u64> {
    let lo = min(values)?;
    let hi = max(values)?;
    Ok((hi as i128 - lo as i128) as u64)
}

/// Median of `values` in any order.
///
/// Sorts an independent copy; even counts average the two central elements.
pub fn median(values: &[i64]) -> Result<f64> {
    median_of_sorted(&sorted_copy(values))
}

/// First and third quartiles of `values` in any order, as `(q1, q3)`.
pub fn quartiles(values: &[i64]) -> Result<(f64, f64)> {
    quartiles_of_sorted(&sorted_copy(values))
}

fn sorted_copy(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    SortAlgorithm::default().apply(&mut sorted);
    sorted
}

fn median_of_sorted(sorted: &[i64]) -> Result<f64> {
    let n = sorted.len();
    if n == 0 {
        return Err(StatsError::EmptyInput);
    }

    let mid = n / 2;
    if n % 2 == 1 {
        Ok(sorted[mid] as f64)
    } else {
        Ok((sorted[mid - 1] as i128 + sorted[mid] as i128) as f64 / 2.0)
    }
}

fn quartiles_of_sorted(sorted: &[i64]) -> Result<(f64, f64)> {
    let n = sorted.len();
    match n {
        0 => Err(StatsError::EmptyInput),
        1 => {
            let only = sorted[0] as f64;
            Ok((only, only))
        }
        _ => {
            let lower = &sorted[..n / 2];
            let upper = &sorted[(n + 1) / 2..];
            Ok((median_of_sorted(lower)?, median_of_sorted(upper)?))
        }
    }
}

/// Compute all statistics, taking order statistics from a partition-sorted copy.
pub fn compute_statistics(values: &[i64], mode: VarianceMode) -> Result<Statistics> {
    compute_statistics_with(values, mode, SortAlgorithm::Partition)
}

/// Compute all statistics, sorting an independent copy with `algorithm`.
///
/// The caller's slice is never reordered.
pub fn compute_statistics_with(
    values: &[i64],
    mode: VarianceMode,
    algorithm: SortAlgorithm,
) -> Result<Statistics> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut sorted = values.to_vec();
    algorithm.apply(&mut sorted);
    statistics_from_sorted(&sorted, mode)
}

/// Compute all statistics from data the caller has usually sorted already.
///
/// Ascending input is used as is. Anything else is sorted into a copy first,
/// so order statistics never come from an unsorted slice.
pub fn statistics_from_sorted(sorted: &[i64], mode: VarianceMode) -> Result<Statistics> {
    if sorted.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if !is_sorted(sorted) {
        debug!("input to statistics_from_sorted is not ascending, sorting a copy");
        return statistics_from_sorted(&sorted_copy(sorted), mode);
    }

    let lo = min(sorted)?;
    let hi = max(sorted)?;
    let mean = mean(sorted)?;
    let variance = variance(sorted, mean, mode)?;
    let (q1, q3) = quartiles_of_sorted(sorted)?;

    let stats = Statistics {
        count: sorted.len(),
        sum: sum(sorted),
        mean,
        variance,
        std_dev: std_dev(variance),
        min: lo,
        max: hi,
        range: (hi as i128 - lo as i128) as u64,
        median: median_of_sorted(sorted)?,
        q1,
        q3,
        mode,
    };

    debug!(
        count = stats.count,
        mean = stats.mean,
        variance = stats.variance,
        mode = mode.name(),
        "computed statistics"
    );

    Ok(stats)
}
