//! Variance and standard deviation, sample and population.
//!
//! Both variances use the one-pass algebraic form `(n·Σx² − (Σx)²) / d`,
//! with `d = n·(n−1)` for the sample estimator and `d = n²` for the
//! population estimator.
//!
//! Degenerate inputs are not guarded: `var` of a single element and either
//! variance of an empty sequence divide zero by zero and report NaN. The
//! standard deviations are plain square roots of the variances; severe
//! floating-point cancellation near zero variance can make the radicand
//! slightly negative, which likewise reports NaN.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::reductions::sums::{sum, sum_squares};

/// Sample variance of a sequence.
///
/// NaN for empty or single-element input (unguarded 0/0).
#[inline]
pub fn var<T: Float>(vals: &[T]) -> T {
    let s = sum(vals);
    let ss = sum_squares(vals);
    let n = T::from(vals.len()).unwrap_or_else(T::zero);

    (n * ss - s * s) / (n * (n - T::one()))
}

/// Population variance of a sequence.
///
/// NaN for empty input (unguarded 0/0).
#[inline]
pub fn varp<T: Float>(vals: &[T]) -> T {
    let s = sum(vals);
    let ss = sum_squares(vals);
    let n = T::from(vals.len()).unwrap_or_else(T::zero);

    (n * ss - s * s) / (n * n)
}

/// Sample standard deviation: `sqrt(var)`.
#[inline]
pub fn stdev<T: Float>(vals: &[T]) -> T {
    var(vals).sqrt()
}

/// Population standard deviation: `sqrt(varp)`.
#[inline]
pub fn stdevp<T: Float>(vals: &[T]) -> T {
    varp(vals).sqrt()
}
