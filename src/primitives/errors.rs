//! Error types for statistics operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions the library can report. Almost
//! every function is infallible by design and signals degenerate input
//! through the numeric channel (the `0` sentinel for empty sequences, NaN
//! for unguarded divisions); the variants here cover the few places where a
//! caller mistake is a genuine programming error rather than missing data.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **No-std**: Supports `no_std` environments; no allocation is needed for any variant.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for statistics operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// Rows passed to `sum_product` must all have the same length.
    RaggedRows {
        /// Index of the first row whose length differs from the first row's.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Expected length (the length of the first row).
        expected: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for StatsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::RaggedRows { row, len, expected } => {
                write!(
                    f,
                    "Ragged rows: row {row} has {len} values, expected {expected}"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for StatsError {}
