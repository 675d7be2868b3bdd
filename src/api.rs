//! Runtime aggregate dispatch.
//!
//! ## Purpose
//!
//! Charting and reporting callers usually pick the statistic at runtime (a
//! chart's aggregation mode, a report column's function). [`Aggregate`]
//! names every scalar statistic in the crate and dispatches to it, so those
//! callers hold one enum value instead of a function pointer per statistic.
//!
//! ## Design notes
//!
//! * **Scratch input**: `compute` takes `&mut [T]` because [`Aggregate::Median`]
//!   sorts its input. Callers are expected to hand over a scratch window
//!   (a copy of the data being aggregated), not their primary storage.
//! * **Count**: exists only here — it is an aggregation mode, not a
//!   statistic — and reports the element count as a float.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::reductions::extrema::{max, min};
use crate::reductions::sums::{product, sum, sum_squares};
use crate::statistics::center::{average, median_in_place};
use crate::statistics::dispersion::{stdev, stdevp, var, varp};

// ============================================================================
// Aggregate Dispatch
// ============================================================================

/// A scalar statistic selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregate {
    /// Arithmetic sum.
    #[default]
    Sum,

    /// Sum of squares.
    SumSquares,

    /// Product of all elements.
    Product,

    /// Smallest element.
    Min,

    /// Largest element.
    Max,

    /// Arithmetic mean.
    Average,

    /// Number of elements, as a float.
    Count,

    /// Median; sorts the scratch slice.
    Median,

    /// Sample variance.
    Var,

    /// Population variance.
    VarP,

    /// Sample standard deviation.
    Stdev,

    /// Population standard deviation.
    StdevP,
}

impl Aggregate {
    /// Compute the selected statistic over a scratch window of values.
    ///
    /// `Median` sorts `vals` in place; every other variant leaves it
    /// untouched. Each variant inherits the degenerate-input behavior of
    /// the function it dispatches to.
    pub fn compute<T: Float>(&self, vals: &mut [T]) -> T {
        match self {
            Self::Sum => sum(vals),
            Self::SumSquares => sum_squares(vals),
            Self::Product => product(vals),
            Self::Min => min(vals),
            Self::Max => max(vals),
            Self::Average => average(vals),
            Self::Count => T::from(vals.len()).unwrap_or_else(T::zero),
            Self::Median => median_in_place(vals),
            Self::Var => var(vals),
            Self::VarP => varp(vals),
            Self::Stdev => stdev(vals),
            Self::StdevP => stdevp(vals),
        }
    }
}
