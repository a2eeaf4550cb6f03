//! Sort algorithm selection.
//!
//! Every algorithm sorts `i64` slices ascending in place. Integer keys carry
//! no identity beyond their value, so all of them produce the same output for
//! the same input even though none of them is stable.

use clap::ValueEnum;
use tracing::debug;

use crate::{exchange_sort, parallel_sort, partition_sort};

/// In-place sorting algorithm used before order statistics are taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortAlgorithm {
    /// Quadratic adjacent-swap sort
    Exchange,
    /// Last-element pivot quicksort with an explicit work stack
    #[default]
    Partition,
    /// Partition sort with both sides forked onto the rayon pool
    Parallel,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Exchange,
        SortAlgorithm::Partition,
        SortAlgorithm::Parallel,
    ];

    /// Sort `data` ascending in place.
    pub fn apply(self, data: &mut [i64]) {
        debug!(algorithm = self.name(), len = data.len(), "sorting");
        match self {
            SortAlgorithm::Exchange => exchange_sort::sort(data),
            SortAlgorithm::Partition => partition_sort::sort(data),
            SortAlgorithm::Parallel => parallel_sort::sort(data),
        }
    }

    /// Stable identifier used in reports.
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Exchange => "exchange",
            SortAlgorithm::Partition => "partition",
            SortAlgorithm::Parallel => "parallel",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
