//! Exchange Sort Implementation
//!
//! Quadratic bubble-style sort: each pass walks adjacent pairs and swaps the
//! ones that are out of order, so after pass `k` the `k` largest elements sit
//! in their final positions.
//!
//! Complexity: O(n²) comparisons, O(1) extra memory

/// Sort a slice in-place using exchange sort.
///
/// Performs at most `n - 1` passes. A pass that makes no swap proves the
/// slice is already ordered and ends the sort early.
///
/// # Arguments
/// * `data` - The slice to sort in-place
pub fn sort(data: &mut [i64]) {
    let max_passes = data.len().saturating_sub(1);
    sort_passes(data, max_passes);
}

/// Run at most `max_passes` exchange passes and return how many ran.
fn sort_passes(data: &mut [i64], max_passes: usize) -> usize {
    let n = data.len();
    if n <= 1 {
        return 0;
    }

    let mut passes = 0;
    for pass in 0..max_passes.min(n - 1) {
        let mut swapped = false;

        // The last `pass` elements are already in place
        for j in 0..n - pass - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        passes += 1;

        if !swapped {
            break;
        }
    }

    passes
}
