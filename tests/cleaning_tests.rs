//! Tests for the destructive clean-up functions.

use approx::assert_relative_eq;
use quickstats::cleaning::{compact_finite, filter_invalid, filter_invalid_pairs, round_to_precision};
use quickstats::stats::average;

// ============================================================================
// Non-Finite Filtering
// ============================================================================

#[test]
fn filter_drops_nan_and_infinities() {
    let mut samples = vec![1.0, f64::NAN, 3.0, f64::INFINITY, 5.0];
    let n_dropped = filter_invalid(&mut samples);
    assert_eq!(samples, vec![1.0, 3.0, 5.0]);
    assert_eq!(samples.len(), 3);
    assert_eq!(n_dropped, 2);
}

#[test]
fn filter_keeps_finite_order() {
    let mut samples = vec![f64::NEG_INFINITY, 9.0, -2.0, f64::NAN, 0.0, 4.5];
    filter_invalid(&mut samples);
    assert_eq!(samples, vec![9.0, -2.0, 0.0, 4.5]);
}

#[test]
fn filter_of_clean_samples_is_a_no_op() {
    let mut samples = vec![1.0, 2.0, 3.0];
    assert_eq!(filter_invalid(&mut samples), 0);
    assert_eq!(samples, vec![1.0, 2.0, 3.0]);
}

#[test]
fn filter_can_empty_the_samples() {
    let mut samples = vec![f64::NAN, f64::INFINITY];
    assert_eq!(filter_invalid(&mut samples), 2);
    assert!(samples.is_empty());
}

#[test]
fn statistics_after_filtering_use_new_length() {
    let mut samples = vec![2.0, f64::NAN, 4.0];
    assert!(average(&samples).is_nan());
    filter_invalid(&mut samples);
    assert_eq!(average(&samples), 3.0);
}

#[test]
fn compact_reports_valid_length() {
    let mut buffer = [1.0, f64::NAN, 3.0, f64::INFINITY, 5.0];
    let n_valid = compact_finite(&mut buffer);
    assert_eq!(n_valid, 3);
    assert_eq!(buffer[..n_valid], [1.0, 3.0, 5.0]);
}

#[test]
fn pair_filter_keeps_alignment() {
    let mut x = vec![1.0, 2.0, f64::NAN, 4.0, 5.0];
    let mut y = vec![10.0, f64::INFINITY, 30.0, 40.0, 50.0];
    let n_dropped = filter_invalid_pairs(&mut x, &mut y);
    assert_eq!(n_dropped, 2);
    assert_eq!(x, vec![1.0, 4.0, 5.0]);
    assert_eq!(y, vec![10.0, 40.0, 50.0]);
}

#[test]
fn pair_filter_truncates_to_shorter_length() {
    let mut x = vec![1.0, 2.0, 3.0];
    let mut y = vec![1.0, 2.0];
    assert_eq!(filter_invalid_pairs(&mut x, &mut y), 0);
    assert_eq!(x, vec![1.0, 2.0]);
    assert_eq!(y, vec![1.0, 2.0]);
}

// ============================================================================
// Rounding
// ============================================================================

#[test]
fn rounds_to_two_digits() {
    let mut samples = [1.2345];
    round_to_precision(&mut samples, 2);
    assert_eq!(samples, [1.23]);
}

/// Halfway cases round away from zero.
#[test]
fn rounds_halfway_away_from_zero() {
    let mut samples = [0.125, -0.125];
    round_to_precision(&mut samples, 2);
    assert_eq!(samples, [0.13, -0.13]);

    let mut samples = [2.5, -2.5, 0.5];
    round_to_precision(&mut samples, 0);
    assert_eq!(samples, [3.0, -3.0, 1.0]);
}

#[test]
fn rounds_every_sample_in_place() {
    let mut samples = [3.14159, 2.71828, -1.41421];
    round_to_precision(&mut samples, 3);
    assert_eq!(samples, [3.142, 2.718, -1.414]);
}

#[test]
fn negative_digits_round_to_tens() {
    let mut samples = [1234.0, -1250.0];
    round_to_precision(&mut samples, -2);
    assert_relative_eq!(samples[0], 1200.0, epsilon = 1e-9);
    assert_relative_eq!(samples[1], -1300.0, epsilon = 1e-9);
}

#[test]
fn rounding_keeps_non_finite_values() {
    let mut samples = [f64::INFINITY, f64::NAN];
    round_to_precision(&mut samples, 2);
    assert_eq!(samples[0], f64::INFINITY);
    assert!(samples[1].is_nan());
}
