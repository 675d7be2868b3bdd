//! Tests for the accumulating sum and product reductions.
//!
//! These tests verify:
//! - Arithmetic sum, sum of squares, and product over normal data
//! - The `0` sentinel for empty input (including for `product`)
//! - Accumulation under negative and fractional values
//!
//! ## Test Organization
//!
//! 1. **Empty-Input Sentinels** - all three reductions report 0
//! 2. **Value Tests** - known results on small sequences
//! 3. **Sign Handling** - negative and mixed-sign data

use approx::assert_relative_eq;

use vecstats::prelude::*;

// ============================================================================
// Empty-Input Sentinel Tests
// ============================================================================

/// Test that every reduction reports 0 on empty input.
///
/// `product` in particular reports the 0 sentinel, not the empty-product
/// identity 1.
#[test]
fn test_empty_sentinels() {
    let empty: Vec<f64> = vec![];

    assert_eq!(sum(&empty), 0.0);
    assert_eq!(sum_squares(&empty), 0.0);
    assert_eq!(product(&empty), 0.0);
}

// ============================================================================
// Value Tests
// ============================================================================

/// Test sum on a small known sequence.
#[test]
fn test_sum_basic() {
    assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
    assert_eq!(sum(&[5.0]), 5.0);
}

/// Test sum of squares on a small known sequence.
#[test]
fn test_sum_squares_basic() {
    assert_eq!(sum_squares(&[1.0, 2.0, 3.0]), 14.0);
    assert_eq!(sum_squares(&[-3.0]), 9.0);
}

/// Test product on a small known sequence.
#[test]
fn test_product_basic() {
    assert_eq!(product(&[1.0, 2.0, 3.0]), 6.0);
    assert_eq!(product(&[7.0]), 7.0);
}

/// Test that a zero anywhere in the sequence zeroes the product.
#[test]
fn test_product_with_zero_element() {
    assert_eq!(product(&[4.0, 0.0, 9.0]), 0.0);
}

/// Test fractional accumulation stays within floating-point tolerance.
#[test]
fn test_sum_fractional() {
    let vals = [0.1, 0.2, 0.3];
    assert_relative_eq!(sum(&vals), 0.6, epsilon = 1e-12);
}

// ============================================================================
// Sign Handling Tests
// ============================================================================

/// Test sum and product over mixed-sign data.
#[test]
fn test_mixed_signs() {
    assert_eq!(sum(&[-1.0, 2.0, -3.0]), -2.0);
    assert_eq!(product(&[-1.0, 2.0, -3.0]), 6.0);
    assert_eq!(product(&[-1.0, 2.0, 3.0]), -6.0);
}

/// Test the reductions are generic over `f32` as well.
#[test]
fn test_f32_support() {
    let vals: Vec<f32> = vec![1.0, 2.0, 3.0];
    assert_eq!(sum(&vals), 6.0_f32);
    assert_eq!(sum_squares(&vals), 14.0_f32);
}
