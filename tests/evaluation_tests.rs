#![cfg(feature = "dev")]
//! Tests for diagnostics, knots and cumulative sums.

use approx::assert_relative_eq;

use isoreg_rs::internals::evaluation::diagnostics::{Diagnostics, count_levels};
use isoreg_rs::internals::evaluation::knots::{cumulative, knots};

// ============================================================================
// Knots
// ============================================================================

#[test]
fn test_knots_mark_level_ends() {
    let fit = [1.0, 2.5, 2.5, 4.0, 4.0, 4.0];
    assert_eq!(knots(&fit), vec![0, 2, 5]);
}

#[test]
fn test_knots_edge_cases() {
    let empty: [f64; 0] = [];
    assert!(knots(&empty).is_empty());
    assert_eq!(knots(&[7.0]), vec![0]);
    assert_eq!(knots(&[2.0, 2.0, 2.0]), vec![2]);
}

// ============================================================================
// Cumulative Sums
// ============================================================================

#[test]
fn test_cumulative_starts_at_zero() {
    assert_eq!(cumulative(&[1.0, 3.0, 2.0]), vec![0.0, 1.0, 4.0, 6.0]);
    let empty: [f64; 0] = [];
    assert_eq!(cumulative(&empty), vec![0.0]);
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_diagnostics_exact_fit() {
    let y = [1.0, 2.0, 3.0];
    let diag = Diagnostics::compute(&y, &y);
    assert_relative_eq!(diag.rss, 0.0);
    assert_relative_eq!(diag.rmse, 0.0);
    assert_relative_eq!(diag.mae, 0.0);
    assert_relative_eq!(diag.r_squared, 1.0);
    assert_eq!(diag.levels, 3);
}

#[test]
fn test_diagnostics_pooled_fit() {
    let y = [3.0, 2.0, 1.0];
    let fit = [2.0, 2.0, 2.0];
    let diag = Diagnostics::compute(&y, &fit);
    assert_relative_eq!(diag.rss, 2.0);
    assert_relative_eq!(diag.rmse, (2.0f64 / 3.0).sqrt());
    assert_relative_eq!(diag.mae, 2.0 / 3.0);
    assert_relative_eq!(diag.r_squared, 0.0);
    assert_eq!(diag.levels, 1);
}

#[test]
fn test_diagnostics_constant_data() {
    let y = [4.0, 4.0];
    let diag = Diagnostics::compute(&y, &y);
    assert_relative_eq!(diag.r_squared, 0.0);
    assert_eq!(diag.levels, 1);
}

#[test]
fn test_diagnostics_empty() {
    let empty: [f64; 0] = [];
    let diag = Diagnostics::compute(&empty, &empty);
    assert_eq!(diag.levels, 0);
    assert_relative_eq!(diag.rss, 0.0);
}

#[test]
fn test_count_levels() {
    assert_eq!(count_levels(&[1.0, 1.0, 2.0, 3.0, 3.0]), 3);
    let empty: [f64; 0] = [];
    assert_eq!(count_levels(&empty), 0);
}

#[test]
fn test_diagnostics_display() {
    let diag = Diagnostics::compute(&[3.0, 2.0, 1.0], &[2.0, 2.0, 2.0]);
    let text = format!("{}", diag);
    assert!(text.starts_with("Isotonic Diagnostics:"));
    assert!(text.contains("RSS:          2.000000"));
    assert!(text.contains("Levels:       1"));
}
