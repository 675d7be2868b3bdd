//! Tests for central-tendency statistics: mean and median.
//!
//! These tests verify:
//! - The arithmetic mean, including its unguarded empty-input NaN
//! - Median for odd and even lengths
//! - The in-place variant's sort side effect and the copying variant's lack of it
//! - Idempotence of median on already-sorted data
//!
//! ## Test Organization
//!
//! 1. **Mean** - known values, empty-input NaN regression
//! 2. **Median Values** - odd, even, single, duplicates
//! 3. **Mutation Contract** - in-place vs copying variants
//! 4. **Idempotence**

use approx::assert_relative_eq;

use vecstats::prelude::*;

// ============================================================================
// Mean Tests
// ============================================================================

/// Test the mean of a small known sequence.
#[test]
fn test_average_basic() {
    assert_eq!(average(&[2.0, 4.0, 6.0]), 4.0);
    assert_eq!(average(&[5.0]), 5.0);
}

/// Pin the unguarded empty-input behavior: 0/0 reports NaN.
#[test]
fn test_average_empty_is_nan() {
    let empty: Vec<f64> = vec![];

    assert!(average(&empty).is_nan());
}

/// Test the mean over mixed-sign data.
#[test]
fn test_average_mixed_signs() {
    assert_eq!(average(&[-2.0, 2.0]), 0.0);
    assert_relative_eq!(average(&[1.0, 2.0]), 1.5);
}

// ============================================================================
// Median Value Tests
// ============================================================================

/// Test the empty-input sentinel.
#[test]
fn test_median_empty() {
    let empty: Vec<f64> = vec![];

    assert_eq!(median(&empty), 0.0);
}

/// Test the odd-length median is the middle element.
#[test]
fn test_median_odd() {
    assert_eq!(median(&[1.0, 2.0, 3.0]), 2.0);
    assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
    assert_eq!(median(&[9.0]), 9.0);
}

/// Test the even-length median averages the two middle elements.
#[test]
fn test_median_even() {
    assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    assert_eq!(median(&[1.0, 2.0]), 1.5);
}

/// Test median with duplicate values.
#[test]
fn test_median_duplicates() {
    assert_eq!(median(&[2.0, 2.0, 2.0]), 2.0);
    assert_eq!(median(&[1.0, 2.0, 2.0, 7.0]), 2.0);
}

// ============================================================================
// Mutation Contract Tests
// ============================================================================

/// Test that `median_in_place` sorts the caller's slice.
#[test]
fn test_median_in_place_sorts_input() {
    let mut vals = vec![3.0, 1.0, 2.0];
    let m = median_in_place(&mut vals);

    assert_eq!(m, 2.0);
    assert_eq!(vals, vec![1.0, 2.0, 3.0]);
}

/// Test that the copying variant leaves the input untouched.
#[test]
fn test_median_does_not_mutate_input() {
    let vals = vec![3.0, 1.0, 2.0];
    let m = median(&vals);

    assert_eq!(m, 2.0);
    assert_eq!(vals, vec![3.0, 1.0, 2.0]);
}

// ============================================================================
// Idempotence Tests
// ============================================================================

/// Test calling median twice on the same (now-sorted) slice agrees.
#[test]
fn test_median_idempotent_after_sort() {
    let mut vals = vec![5.0, 1.0, 4.0, 2.0, 3.0];

    let first = median_in_place(&mut vals);
    let second = median_in_place(&mut vals);

    assert_eq!(first, 3.0);
    assert_eq!(second, first);
}
