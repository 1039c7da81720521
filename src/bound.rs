//! Upper-bound binary search.
//!
//! Finds the smallest element of a sorted slice that is greater than or
//! equal to a target, and reports how many halving steps that took.

use serde::Serialize;

/// Outcome of [`upper_bound`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundResult<T> {
    /// Loop iterations performed, at most `floor(log2(n)) + 1`
    pub iterations: usize,
    /// Smallest element `>= target`, or `None` when the target exceeds every element
    pub bound: Option<T>,
}

/// Binary search for the smallest element of `arr` that is `>= target`.
///
/// `arr` must be sorted ascending. Elements that do not compare (NaN)
/// are treated as smaller than the target.
pub fn upper_bound<T: PartialOrd + Copy>(arr: &[T], target: T) -> BoundResult<T> {
    // Candidate range is arr[left..right]
    let mut left = 0;
    let mut right = arr.len();
    let mut iterations = 0;
    let mut bound = None;

    while left < right {
        iterations += 1;
        let mid = left + (right - left - 1) / 2;

        if arr[mid] >= target {
            bound = Some(arr[mid]);
            right = mid;
        } else {
            left = mid + 1;
        }
    }

    BoundResult { iterations, bound }
}

/// Fixed inputs for the `bound` self-test: `(sorted array, target)`.
pub const SELF_TEST_CASES: &[(&[f64], f64)] = &[
    (&[0.2, 1.1, 1.9, 2.5, 3.3, 4.8], 2.0),
    (&[0.5, 1.2, 1.7, 2.4, 3.0, 3.6, 4.1], 3.5),
    (&[0.1, 0.3, 0.8, 1.0, 1.5], 0.05),
    // Target larger than all elements
    (&[1.0, 2.0, 3.0, 4.0, 5.0], 5.5),
];
