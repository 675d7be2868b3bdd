//! Accumulating sums and products over a single sequence.
//!
//! All three reductions share the same contract: the empty sequence reports
//! the sentinel `0`, anything else is accumulated left to right under native
//! floating-point semantics (no NaN or overflow special-casing).

// External dependencies
use num_traits::Float;

/// Arithmetic sum of a sequence.
///
/// Returns `0` for an empty sequence.
#[inline]
pub fn sum<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let mut sum = T::zero();
    for &v in vals {
        sum = sum + v;
    }
    sum
}

/// Sum of the squares of a sequence.
///
/// Returns `0` for an empty sequence.
#[inline]
pub fn sum_squares<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let mut sum = T::zero();
    for &v in vals {
        sum = sum + v * v;
    }
    sum
}

/// Product of a sequence.
///
/// Returns `0` for an empty sequence. Note this is a deliberate "no data"
/// sentinel, not the empty-product identity `1`; callers distinguishing the
/// two must check emptiness themselves.
#[inline]
pub fn product<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let mut product = T::one();
    for &v in vals {
        product = product * v;
    }
    product
}
