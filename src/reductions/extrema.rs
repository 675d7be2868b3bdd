//! Minimum and maximum scans.
//!
//! Both scans report the sentinel `0` for an empty sequence and otherwise
//! find their extremum by pairwise comparison against a seed bound.
//!
//! The seeds are asymmetric: `min` starts from the largest finite value, but
//! `max` starts from the smallest *positive* normal value rather than from
//! negative infinity. A sequence whose elements are all negative therefore
//! reports that positive seed from `max` instead of its true maximum. This
//! long-standing behavior is kept for compatibility with existing callers
//! and is pinned by a regression test; see `max` for details.

// External dependencies
use num_traits::Float;

/// Smallest element of a sequence.
///
/// Returns `0` for an empty sequence.
#[inline]
pub fn min<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let mut min = T::max_value();
    for &v in vals {
        if v < min {
            min = v;
        }
    }
    min
}

/// Largest element of a sequence.
///
/// Returns `0` for an empty sequence.
///
/// # Known defect
///
/// The scan is seeded with `T::min_positive_value()`, so when every element
/// is negative no element beats the seed and the seed itself is returned.
/// Kept as-is for behavioral compatibility; callers with possibly
/// all-negative data should negate and use [`min`].
#[inline]
pub fn max<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let mut max = T::min_positive_value();
    for &v in vals {
        if v > max {
            max = v;
        }
    }
    max
}
