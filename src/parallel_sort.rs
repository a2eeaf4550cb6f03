//! Parallel Partition-Exchange Sort using Rayon
//!
//! Runs the same last-element partition step as [`crate::partition_sort`],
//! then sorts the two sides concurrently with `rayon::join`. The sides are
//! disjoint sub-slices, so no merge step is needed and the ordering and
//! permutation guarantees of the sequential sort carry over unchanged.
//!
//! Ranges below [`SEQUENTIAL_THRESHOLD`] fall back to the sequential sort,
//! where task overhead would outweigh the parallel speedup.

use crate::partition_sort;

/// Ranges at or below this length are sorted on the current thread.
pub const SEQUENTIAL_THRESHOLD: usize = 4096;

/// Parallel partition-exchange sort.
///
/// # Arguments
///
/// * `data` - Mutable slice to sort in place
///
/// # Example
///
/// ```
/// let mut data = vec![4, -2, 3, 1];
/// sort_stats::parallel_sort::sort(&mut data);
/// assert_eq!(data, vec![-2, 1, 3, 4]);
/// ```
pub fn sort(mut data: &mut [i64]) {
    loop {
        if data.len() <= SEQUENTIAL_THRESHOLD {
            partition_sort::sort(data);
            return;
        }

        let current = std::mem::take(&mut data);
        let p = partition_sort::partition(current);
        let (left, rest) = current.split_at_mut(p);
        let right = &mut rest[1..];

        // Only fork when both sides are large; a lopsided split keeps
        // looping here so skewed pivots cannot deepen the call stack
        if left.len() <= SEQUENTIAL_THRESHOLD {
            partition_sort::sort(left);
            data = right;
        } else if right.len() <= SEQUENTIAL_THRESHOLD {
            partition_sort::sort(right);
            data = left;
        } else {
            rayon::join(|| sort(left), || sort(right));
            return;
        }
    }
}
