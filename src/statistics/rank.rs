//! 1-based rank of a value within a sequence.
//!
//! ## Purpose
//!
//! Reports the position a value occupies in the ascending-sorted sequence,
//! numbered from 1, or `0` when the value is not present.
//!
//! ## Key concepts
//!
//! The sequence is always sorted ascending; the [`RankDirection`] controls
//! only the scan over the sorted data. A forward scan returns the first
//! matching position; a backward scan returns the last. For unique values
//! both report the same rank, but with duplicates the two directions land on
//! different positions of the tie run — both behaviors are part of the
//! contract.
//!
//! ## Invariants
//!
//! * Matching is exact value equality, never tolerance-based.
//! * The returned rank is in `1..=n`, or `0` for "not found" / empty input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sorting::sort_ascending;

// ============================================================================
// Scan Direction
// ============================================================================

/// Scan direction for rank numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDirection {
    /// Scan the sorted sequence from the start; ties resolve to the first match.
    #[default]
    Ascending,

    /// Scan the sorted sequence from the end; ties resolve to the last match.
    Descending,
}

impl RankDirection {
    /// Interpret the conventional integer sign flag: positive means
    /// ascending, zero or negative means descending.
    #[inline]
    pub fn from_flag(flag: i32) -> Self {
        if flag > 0 {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

// ============================================================================
// Rank Functions
// ============================================================================

/// Rank of `num` within `vals`, sorting a private copy.
///
/// Returns `0` for an empty sequence or when no element equals `num`. The
/// input is left untouched; use [`rank_in_place`] to avoid the copy.
#[inline]
pub fn rank<T: Float>(num: T, vals: &[T], direction: RankDirection) -> usize {
    let mut scratch: Vec<T> = vals.to_vec();
    rank_in_place(num, &mut scratch, direction)
}

/// Rank of `num` within `vals`, sorting the caller's slice in place.
///
/// Sorts `vals` ascending (an observable side effect) regardless of
/// `direction`, then scans for an exact match in the requested direction.
/// Returns the 1-based position of the match, or `0` when `num` is absent
/// or the sequence is empty.
#[allow(clippy::float_cmp)]
pub fn rank_in_place<T: Float>(num: T, vals: &mut [T], direction: RankDirection) -> usize {
    if vals.is_empty() {
        return 0;
    }

    sort_ascending(vals);

    match direction {
        RankDirection::Ascending => {
            for (i, &v) in vals.iter().enumerate() {
                if num == v {
                    return i + 1;
                }
            }
        }
        RankDirection::Descending => {
            for i in (0..vals.len()).rev() {
                if num == vals[i] {
                    return i + 1;
                }
            }
        }
    }
    0
}
