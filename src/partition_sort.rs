//! Partition-Exchange Sort Implementation
//!
//! Quicksort with the last element of each range as pivot (Lomuto scheme).
//! Elements equal to the pivot go to the left side, so the sort is not stable.
//!
//! Instead of recursing, pending ranges live on an explicit work stack. The
//! smaller side of every partition is processed first, which keeps the stack
//! at O(log n) entries even when an adversarial input drives the comparison
//! count to O(n²).
//!
//! Complexity: O(n log n) average, O(n²) worst case comparisons

use std::ops::Range;

/// Partition a non-empty slice around its last element.
///
/// After the call every element left of the returned index is `<=` the
/// pivot, every element right of it is `>` the pivot, and the pivot sits at
/// the returned index.
///
/// # Panics
/// Panics if `data` is empty.
pub fn partition(data: &mut [i64]) -> usize {
    assert!(!data.is_empty(), "cannot partition an empty slice");

    let last = data.len() - 1;
    let pivot = data[last];
    let mut store = 0;

    for j in 0..last {
        if data[j] <= pivot {
            data.swap(store, j);
            store += 1;
        }
    }

    data.swap(store, last);
    store
}

/// Sort a slice in-place using partition-exchange sort.
///
/// # Arguments
/// * `data` - The slice to sort in-place
pub fn sort(data: &mut [i64]) {
    sort_tracking_depth(data);
}

/// Sort `data` and return the peak number of ranges held on the work stack.
fn sort_tracking_depth(data: &mut [i64]) -> usize {
    if data.len() <= 1 {
        return 0;
    }

    let mut stack: Vec<Range<usize>> = vec![0..data.len()];
    let mut peak = stack.len();

    while let Some(range) = stack.pop() {
        let lo = range.start;
        let hi = range.end;
        let p = lo + partition(&mut data[range]);

        let left = lo..p;
        let right = p + 1..hi;

        // Push the larger side first so the smaller one is popped next
        let (larger, smaller) = if left.len() >= right.len() {
            (left, right)
        } else {
            (right, left)
        };
        if larger.len() > 1 {
            stack.push(larger);
        }
        if smaller.len() > 1 {
            stack.push(smaller);
        }

        peak = peak.max(stack.len());
    }

    peak
}
