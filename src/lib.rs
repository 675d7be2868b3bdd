//! # vecstats — descriptive statistics over numeric sequences
//!
//! A small, dependency-light library of descriptive-statistics functions for
//! in-memory numeric sequences: sums, products, extrema, mean, median, rank,
//! and sample/population variance and standard deviation. It is aimed at
//! callers (charting or reporting layers, typically) that need quick scalar
//! aggregates over one or more numeric vectors.
//!
//! ## Quick Start
//!
//! ```rust
//! use vecstats::prelude::*;
//!
//! let vals = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//!
//! assert_eq!(sum(&vals), 40.0);
//! assert_eq!(average(&vals), 5.0);
//! assert_eq!(stdevp(&vals), 2.0);
//!
//! // `median` sorts a private copy; `median_in_place` sorts the caller's slice.
//! assert_eq!(median(&vals), 4.5);
//! ```
//!
//! ## Degenerate inputs
//!
//! The library never panics and never allocates an error for a degenerate
//! sequence. Empty input reports the sentinel `0`; the unguarded divisions
//! (`average` of an empty sequence, `var` of a single element) follow IEEE-754
//! and yield NaN. The one genuinely fallible operation is
//! [`sum_product`](prelude::sum_product), which rejects ragged row sets with
//! [`StatsError::RaggedRows`]:
//!
//! ```rust
//! use vecstats::prelude::*;
//!
//! let rows = [vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
//! assert_eq!(sum_product(&rows)?, 32.0);
//!
//! let ragged = [vec![1.0, 2.0], vec![3.0]];
//! assert!(matches!(
//!     sum_product(&ragged),
//!     Err(StatsError::RaggedRows { row: 1, len: 1, expected: 2 })
//! ));
//! # Result::<(), StatsError>::Ok(())
//! ```
//!
//! ## Aggregate dispatch
//!
//! When the statistic is selected at runtime (a chart's aggregation mode, a
//! report column), use the [`Aggregate`] enum:
//!
//! ```rust
//! use vecstats::prelude::*;
//!
//! let mut window = vec![3.0, 1.0, 2.0];
//! assert_eq!(Aggregate::Median.compute(&mut window), 2.0);
//! assert_eq!(Aggregate::Count.compute(&mut window), 3.0);
//! ```
//!
//! ## `no_std`
//!
//! Disable default features for `no_std` environments; `sqrt` is provided
//! through `libm` via `num-traits`:
//!
//! ```toml
//! [dependencies]
//! vecstats = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - error type and sorting utilities.
mod primitives;

// Layer 2: Reductions - single-pass aggregations.
mod reductions;

// Layer 3: Statistics - order and dispersion statistics.
mod statistics;

// Layer 4: API - runtime aggregate dispatch.
mod api;

// Standard vecstats prelude.
pub mod prelude {
    pub use crate::api::Aggregate;
    pub use crate::primitives::errors::StatsError;
    pub use crate::reductions::extrema::{max, min};
    pub use crate::reductions::products::sum_product;
    pub use crate::reductions::sums::{product, sum, sum_squares};
    pub use crate::statistics::center::{average, median, median_in_place};
    pub use crate::statistics::dispersion::{stdev, stdevp, var, varp};
    pub use crate::statistics::rank::{rank, rank_in_place, RankDirection};
}

pub use crate::api::Aggregate;
pub use crate::primitives::errors::StatsError;

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod reductions {
        pub use crate::reductions::*;
    }
    pub mod statistics {
        pub use crate::statistics::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
