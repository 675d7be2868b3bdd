//! In-place sorting for order statistics.
//!
//! ## Purpose
//!
//! `median` and `rank` operate on an ascending-sorted sequence. This module
//! provides the shared sort step they use, either directly on the caller's
//! slice (the in-place variants) or on a private scratch copy.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting to preserve the relative order of equal values.
//! * **Robustness**: Non-finite values compare as equal to everything, so their
//!   final placement is implementation-defined. Callers working with NaN-bearing
//!   data get a total-but-arbitrary order rather than a panic.
//! * **Fast path**: Already-sorted input is detected in O(n) and left untouched.
//!
//! ## Invariants
//!
//! * After the call, finite values are in non-decreasing order.
//! * The slice is a permutation of its input.
//!
//! ## Non-goals
//!
//! * This module does not compute any statistic itself.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort a sequence in place, in ascending order.
///
/// 1. Checks if the sequence is already sorted (fast path).
/// 2. Performs a stable sort with `partial_cmp`, treating incomparable
///    (NaN) pairs as equal.
#[inline]
pub fn sort_ascending<T: Float>(vals: &mut [T]) {
    // Fast path: already sorted
    if vals.windows(2).all(|w| w[0] <= w[1]) {
        return;
    }

    // Stable sort to keep ties deterministic
    vals.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}
