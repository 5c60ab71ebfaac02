//! Materialization of the fitted sequence from pooled blocks.
//!
//! ## Purpose
//!
//! This module replays a finished [`BlockList`] against the original input to
//! produce the isotonic fit: pooled indices take their block's average, all
//! other indices keep their raw value.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Blocks are visited once, left to right, in the same pass as the indices.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::blocks::BlockList;

/// Write the fit of `x` described by `blocks` into `y`.
///
/// `y` must have the same length as `x`; callers validate this at the boundary.
pub fn materialize_into<T: Float>(x: &[T], blocks: &BlockList<T>, y: &mut [T]) {
    debug_assert_eq!(x.len(), y.len());

    let n = x.len();
    let mut node = blocks.head();
    let mut i = 0;
    while i < n {
        match node {
            Some(id) if blocks.get(id).contains(i) => {
                let block = blocks.get(id);
                let fitted = blocks.value_at(node, x, i);
                y[i..=block.end].fill(fitted);
                i = block.end + 1;
                node = block.next;
            }
            _ => {
                y[i] = x[i];
                i += 1;
            }
        }
    }
}

/// Allocate and return the fit of `x` described by `blocks`.
pub fn materialize<T: Float>(x: &[T], blocks: &BlockList<T>) -> Vec<T> {
    let mut y = vec![T::zero(); x.len()];
    materialize_into(x, blocks, &mut y);
    y
}
