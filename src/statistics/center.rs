//! Central tendency: arithmetic mean and median.
//!
//! ## Design notes
//!
//! * **Mean**: `average` is `sum / n` with no empty guard; an empty sequence
//!   divides zero by zero and reports NaN per IEEE-754. Deliberately not
//!   defended — the caller decides what "no data" means.
//! * **Median**: requires a sort. [`median_in_place`] sorts the caller's
//!   slice (the reorder is part of its contract); [`median`] is the safer
//!   default and sorts a private copy.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sorting::sort_ascending;
use crate::reductions::sums::sum;

/// Arithmetic mean of a sequence.
///
/// # Known edge case
///
/// An empty sequence yields NaN (0/0); there is no guard.
#[inline]
pub fn average<T: Float>(vals: &[T]) -> T {
    sum(vals) / T::from(vals.len()).unwrap_or_else(T::zero)
}

/// Median of a sequence, sorting a private copy.
///
/// Returns `0` for an empty sequence. The input is left untouched; use
/// [`median_in_place`] to avoid the copy when the reorder is acceptable.
#[inline]
pub fn median<T: Float>(vals: &[T]) -> T {
    let mut scratch: Vec<T> = vals.to_vec();
    median_in_place(&mut scratch)
}

/// Median of a sequence, sorting the caller's slice in place.
///
/// Returns `0` for an empty sequence. Otherwise sorts ascending — an
/// observable side effect on the caller's data — then returns the middle
/// element (odd length) or the mean of the two middle elements (even
/// length).
pub fn median_in_place<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    sort_ascending(vals);

    if n % 2 == 0 {
        // Even length: average of the two middle values
        (vals[n / 2 - 1] + vals[n / 2]) / (T::one() + T::one())
    } else {
        // Odd length: middle value
        vals[n / 2]
    }
}
