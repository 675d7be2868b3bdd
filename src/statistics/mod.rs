//! Layer 3: Statistics
//!
//! # Purpose
//!
//! This layer provides the statistics built on top of the reductions:
//! - Central tendency (mean, median)
//! - Rank of a value within a sorted sequence
//! - Sample and population variance and standard deviation
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Statistics ← You are here
//!   ↓
//! Layer 2: Reductions
//!   ↓
//! Layer 1: Primitives
//! ```

/// Central tendency: arithmetic mean and median.
pub mod center;

/// 1-based rank of a value within a sequence.
pub mod rank;

/// Variance and standard deviation (sample and population).
pub mod dispersion;
