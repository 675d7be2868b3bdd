//! Sum of element-wise products across parallel rows.
//!
//! ## Purpose
//!
//! Given a set of equal-length rows, multiplies the corresponding elements
//! of each row down every column and sums those per-column products — the
//! spreadsheet `SUMPRODUCT` reduction.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Ragged row sets are rejected up front with
//!   [`StatsError::RaggedRows`] instead of truncating or indexing out of
//!   bounds. This is the library's only fallible operation.
//! * **Generics**: Rows are anything `AsRef<[T]>`, so `&[Vec<T>]` and
//!   `&[&[T]]` both work.
//!
//! ## Invariants
//!
//! * The column count is taken from the first row.
//! * Validation completes before any arithmetic starts.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::StatsError;

/// Sum over columns of the product of each column's elements across rows.
///
/// Returns `Ok(0)` for an empty row list. Every row must have the same
/// length as the first; the first offender is reported in the error.
///
/// ```rust
/// use vecstats::prelude::*;
///
/// let rows = [vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
/// assert_eq!(sum_product(&rows)?, 32.0);
/// # Result::<(), StatsError>::Ok(())
/// ```
pub fn sum_product<T: Float, R: AsRef<[T]>>(rows: &[R]) -> Result<T, StatsError> {
    if rows.is_empty() {
        return Ok(T::zero());
    }

    let nvals = rows[0].as_ref().len();

    // Reject ragged input before touching any element
    for (row, r) in rows.iter().enumerate() {
        let len = r.as_ref().len();
        if len != nvals {
            return Err(StatsError::RaggedRows {
                row,
                len,
                expected: nvals,
            });
        }
    }

    let mut sum = T::zero();
    for j in 0..nvals {
        let mut product = T::one();
        for r in rows {
            product = product * r.as_ref()[j];
        }
        sum = sum + product;
    }
    Ok(sum)
}
