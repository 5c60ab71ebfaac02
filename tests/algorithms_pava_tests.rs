#![cfg(feature = "dev")]
//! Tests for the bidirectional PAVA driver and the materializer.
//!
//! ## Test Organization
//!
//! 1. **Trivial Inputs** - empty, singleton, sorted
//! 2. **Backward Repair** - violations fixed by leftward pooling only
//! 3. **Forward Repair** - right-boundary violations and merges
//! 4. **Materialization** - replaying blocks into fitted values

use approx::assert_relative_eq;

use isoreg_rs::internals::algorithms::materialize::{materialize, materialize_into};
use isoreg_rs::internals::algorithms::pava::{Phase, PavaDriver, pava_blocks};
use isoreg_rs::internals::primitives::blocks::BlockList;

// ============================================================================
// Helper Functions
// ============================================================================

fn ranges(blocks: &BlockList<f64>) -> Vec<(usize, usize)> {
    blocks.iter().map(|b| (b.start, b.end)).collect()
}

/// Step a driver to completion, recording the phase before every step.
fn phases(x: &[f64]) -> Vec<Phase> {
    let mut driver = PavaDriver::new(x);
    let mut seen = vec![driver.phase()];
    while driver.step() {
        seen.push(driver.phase());
    }
    seen
}

// ============================================================================
// Trivial Inputs
// ============================================================================

/// Empty input performs no steps and produces no blocks.
#[test]
fn test_empty_input() {
    let x: [f64; 0] = [];
    let mut driver = PavaDriver::new(&x);
    assert!(!driver.step());
    assert!(pava_blocks(&x).is_empty());
    assert!(materialize(&x, &pava_blocks(&x)).is_empty());
}

/// A single value is its own fit.
#[test]
fn test_singleton() {
    let x = [5.0];
    let blocks = pava_blocks(&x);
    assert!(blocks.is_empty());
    assert_eq!(materialize(&x, &blocks), vec![5.0]);
}

/// Strictly increasing input never opens a block.
#[test]
fn test_sorted_input_has_no_blocks() {
    let x = [1.0, 2.0, 3.0, 10.0];
    assert!(pava_blocks(&x).is_empty());
    assert!(phases(&x).iter().all(|p| *p == Phase::Scanning));
}

// ============================================================================
// Backward Repair
// ============================================================================

/// A decreasing run collapses into a single block through backward growth.
#[test]
fn test_reverse_sorted() {
    let x = [3.0, 2.0, 1.0];
    let blocks = pava_blocks(&x);
    assert_eq!(ranges(&blocks), vec![(0, 2)]);
    assert_relative_eq!(blocks.get(blocks.head().unwrap()).avg, 2.0);
    assert_eq!(materialize(&x, &blocks), vec![2.0, 2.0, 2.0]);
}

/// A single inversion pools exactly the two offending positions.
#[test]
fn test_single_inversion() {
    let x = [1.0, 3.0, 2.0];
    let blocks = pava_blocks(&x);
    assert_eq!(ranges(&blocks), vec![(1, 2)]);
    assert_eq!(materialize(&x, &blocks), vec![1.0, 2.5, 2.5]);
}

/// Separate violations yield separate, ordered blocks.
#[test]
fn test_independent_violations() {
    let x = [1.0, 3.0, 2.0, 5.0, 4.0, 7.0, 6.0];
    let blocks = pava_blocks(&x);
    assert_eq!(ranges(&blocks), vec![(1, 2), (3, 4), (5, 6)]);
    assert_eq!(
        materialize(&x, &blocks),
        vec![1.0, 2.5, 2.5, 4.5, 4.5, 6.5, 6.5]
    );
}

/// Blocks that touch but whose averages are ordered stay separate.
#[test]
fn test_adjacent_blocks_not_merged_without_violation() {
    let x = [1.0, 0.0, 3.0, 2.0];
    let blocks = pava_blocks(&x);
    assert_eq!(ranges(&blocks), vec![(0, 1), (2, 3)]);
    assert_eq!(materialize(&x, &blocks), vec![0.5, 0.5, 2.5, 2.5]);
}

/// Equal neighbours are pooled during the scan without changing the fit.
#[test]
fn test_ties() {
    let x = [2.0, 2.0, 2.0];
    let blocks = pava_blocks(&x);
    assert!(!blocks.is_empty());
    assert_eq!(materialize(&x, &blocks), vec![2.0, 2.0, 2.0]);
}

// ============================================================================
// Forward Repair
// ============================================================================

/// Backward pooling lowers the average below the right neighbour, which is
/// then absorbed by forward growth.
#[test]
fn test_forward_repair_extends_block() {
    let x = [3.0, 0.0, 1.0];
    let seen = phases(&x);
    assert!(seen.iter().any(|p| matches!(p, Phase::ForwardRepair(_))));

    let blocks = pava_blocks(&x);
    assert_eq!(ranges(&blocks), vec![(0, 2)]);
    let fit = materialize(&x, &blocks);
    for v in fit {
        assert_relative_eq!(v, 4.0 / 3.0, epsilon = 1e-12);
    }
}

/// Forward growth into an existing block merges the two.
#[test]
fn test_forward_repair_merges_successor() {
    let x = [1.0, 0.0, 0.0];
    let blocks = pava_blocks(&x);
    assert_eq!(blocks.len(), 1);
    assert_eq!(ranges(&blocks), vec![(0, 2)]);

    let block = blocks.get(blocks.head().unwrap());
    assert_eq!(block.count, 3);
    assert_relative_eq!(block.avg, 1.0 / 3.0, epsilon = 1e-12);
}

/// The textbook example pools everything to the overall mean.
#[test]
fn test_classic_example() {
    let x = [5.0, 1.0, 4.0, 2.0, 3.0];
    let blocks = pava_blocks(&x);
    assert_eq!(materialize(&x, &blocks), vec![3.0; 5]);
}

/// Several regions interacting through repeated forward repairs.
#[test]
fn test_chained_regions() {
    let x = [4.0, 5.0, 1.0, 6.0, 2.0];
    let fit = materialize(&x, &pava_blocks(&x));
    let expected = [10.0 / 3.0, 10.0 / 3.0, 10.0 / 3.0, 4.0, 4.0];
    for (a, b) in fit.iter().zip(expected.iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12);
    }
}

/// The driver finishes in Scanning with the cursor at the front.
#[test]
fn test_driver_terminates_at_front() {
    let x = [9.0, 1.0, 8.0, 2.0, 7.0, 3.0];
    let mut driver = PavaDriver::new(&x);
    let mut steps = 0;
    while driver.step() {
        steps += 1;
        assert!(steps < 10 * x.len());
    }
    assert_eq!(driver.phase(), Phase::Scanning);
    assert_eq!(driver.cursor(), 0);
}

// ============================================================================
// Materialization
// ============================================================================

/// Materializing into a buffer matches the allocating variant.
#[test]
fn test_materialize_into_buffer() {
    let x = [1.0, 5.0, 0.0, 4.0, 3.0];
    let blocks = pava_blocks(&x);
    let mut y = [f64::NAN; 5];
    materialize_into(&x, &blocks, &mut y);
    assert_eq!(y.to_vec(), materialize(&x, &blocks));
    assert_eq!(y.to_vec(), vec![1.0, 2.5, 2.5, 3.5, 3.5]);
}

/// Positions outside every block are copied unchanged.
#[test]
fn test_materialize_copies_identity_positions() {
    let x = [0.0, 2.0, 1.0, 10.0];
    let blocks = pava_blocks(&x);
    let y = materialize(&x, &blocks);
    assert_eq!(y[0], 0.0);
    assert_eq!(y[3], 10.0);
    assert_eq!(y[1], 1.5);
    assert_eq!(y[2], 1.5);
}

/// Single precision follows the same path.
#[test]
fn test_f32_input() {
    let x: [f32; 3] = [3.0, 2.0, 1.0];
    assert_eq!(materialize(&x, &pava_blocks(&x)), vec![2.0f32; 3]);
}
