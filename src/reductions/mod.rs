//! Layer 2: Reductions
//!
//! # Purpose
//!
//! This layer provides the single-pass aggregations:
//! - Accumulating sums and products over one sequence
//! - Extrema scans
//! - The dot-product-style reduction over parallel rows
//!
//! Every function here makes exactly one pass over its input and holds no
//! state between calls.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Statistics
//!   ↓
//! Layer 2: Reductions ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Accumulating sums and products.
pub mod sums;

/// Minimum and maximum scans.
pub mod extrema;

/// Sum of element-wise products across parallel rows.
pub mod products;
