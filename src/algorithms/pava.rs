//! Bidirectional Pool-Adjacent-Violators driver.
//!
//! ## Purpose
//!
//! This module scans the input once from right to left and pools every
//! monotonicity violation into blocks of a [`BlockList`]. The resulting list,
//! together with the raw input, fully determines the isotonic fit.
//!
//! ## Design notes
//!
//! * **State machine**: The scan is an explicit [`Phase`] machine. Every
//!   transition is a `match` arm, so no flag combination goes unhandled.
//! * **Bidirectional repair**: Growing a block backward can lower its average
//!   below the value on its right. Instead of a second left-to-right pass, the
//!   driver detects that at the block's right boundary and extends the same
//!   block forward, merging with the successor when the ranges meet.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Recent value**: block average if the index is pooled, raw value otherwise.
//! * **Violation**: adjacent pair whose recent values are not strictly increasing
//!   during the scan. Ties are pooled there too, which never changes the fit.
//! * **Boundary**: the first index right of the active block, `end + 1`. Its
//!   recent value comes from the active block's successor.
//!
//! ## Invariants
//!
//! * The cursor only re-visits an index after the active block has grown, so
//!   the scan terminates after O(n) block operations.
//! * New blocks are always opened left of every existing block.
//!
//! ## Non-goals
//!
//! * This module does not produce the output sequence (see `materialize`).
//! * This module does not validate inputs; NaN and infinities flow through
//!   ordinary floating-point comparisons.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::blocks::{BlockId, BlockList};

// ============================================================================
// Phase
// ============================================================================

/// State of the bidirectional scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Comparing the pair `(cursor - 1, cursor)` with no block being grown.
    Scanning,

    /// Absorbing values left of the active block while its average exceeds them,
    /// then checking its right boundary.
    BackwardRepair(BlockId),

    /// Absorbing the value right of the active block (or merging its successor).
    ForwardRepair(BlockId),
}

// ============================================================================
// Driver
// ============================================================================

/// Single-use driver over one input sequence.
pub struct PavaDriver<'a, T> {
    x: &'a [T],
    blocks: BlockList<T>,
    phase: Phase,
    cursor: usize,
    resume_backward: Option<usize>,
}

impl<'a, T: Float> PavaDriver<'a, T> {
    /// Create a driver positioned at the last index of `x`.
    pub fn new(x: &'a [T]) -> Self {
        Self {
            x,
            blocks: BlockList::new(),
            phase: Phase::Scanning,
            cursor: x.len().saturating_sub(1),
            resume_backward: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Blocks built so far.
    pub fn blocks(&self) -> &BlockList<T> {
        &self.blocks
    }

    /// Perform a single transition. Returns `false` once the scan has finished.
    pub fn step(&mut self) -> bool {
        match self.phase {
            Phase::Scanning => self.scan(),
            Phase::BackwardRepair(id) => {
                self.repair_backward(id);
                true
            }
            Phase::ForwardRepair(id) => {
                self.repair_forward(id);
                true
            }
        }
    }

    /// Run to completion and hand over the block list.
    pub fn run(mut self) -> BlockList<T> {
        while self.step() {}

        #[cfg(feature = "tracing-log")]
        tracing::debug!(
            n = self.x.len(),
            blocks = self.blocks.len(),
            "pool-adjacent-violators scan finished"
        );

        self.blocks
    }

    fn scan(&mut self) -> bool {
        let i = self.cursor;
        if i < 1 {
            return false;
        }

        let head = self.blocks.head();
        let right = self.blocks.value_at(head, self.x, i);
        let left = self.blocks.value_at(head, self.x, i - 1);
        if right > left {
            self.cursor -= 1;
            return true;
        }

        let id = self.blocks.prepend(i);
        self.blocks.extend_backward(id, self.x[i], i);
        self.resume_backward = Some(i - 1);
        self.phase = Phase::BackwardRepair(id);

        #[cfg(feature = "tracing-log")]
        tracing::trace!(index = i, "violation found, opening block");

        true
    }

    fn repair_forward(&mut self, id: BlockId) {
        let i = self.cursor;
        self.blocks.extend_forward(id, self.x[i], i);
        self.phase = Phase::BackwardRepair(id);
    }

    fn repair_backward(&mut self, id: BlockId) {
        // Sweep left while the block average still exceeds the raw value.
        let mut stopped_at = None;
        let mut next = self.resume_backward;
        while let Some(j) = next {
            if self.blocks.get(id).avg < self.x[j] {
                self.blocks.extend_backward(id, self.x[j], j);
                next = j.checked_sub(1);
            } else {
                stopped_at = Some(j);
                break;
            }
        }
        self.cursor = stopped_at.unwrap_or(0);

        // Pooling backward may have uncovered a violation on the right.
        let block = self.blocks.get(id);
        let boundary = block.end + 1;
        if boundary < self.x.len()
            && self.blocks.value_at(block.next, self.x, boundary) < block.avg
        {
            #[cfg(feature = "tracing-log")]
            tracing::trace!(
                start = block.start,
                end = block.end,
                "violation at right boundary, repairing forward"
            );

            self.resume_backward = block.start.checked_sub(1);
            self.cursor = boundary;
            self.phase = Phase::ForwardRepair(id);
        } else {
            self.phase = Phase::Scanning;
        }
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Pool every monotonicity violation of `x` into blocks.
///
/// Indices not covered by any returned block keep their raw value in the fit.
pub fn pava_blocks<T: Float>(x: &[T]) -> BlockList<T> {
    PavaDriver::new(x).run()
}
