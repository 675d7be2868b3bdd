//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the building blocks the statistics functions share:
//! - The crate-wide error type
//! - In-place ascending sorting for order statistics
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Statistics
//!   ↓
//! Layer 2: Reductions
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for statistics operations.
pub mod errors;

/// In-place sorting utilities for order statistics.
pub mod sorting;
