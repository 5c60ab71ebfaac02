//! Block store for pooled index ranges.
//!
//! ## Purpose
//!
//! This module provides [`BlockList`], the ordered collection of pooled
//! regions ("blocks") that the PAVA driver grows and merges while repairing
//! monotonicity violations.
//!
//! ## Design notes
//!
//! * **Arena**: Blocks live in a `Vec` and link to their successor by index,
//!   giving O(1) prepend and merge without per-node allocation.
//! * **Recycling**: Slots released by a merge go on a free list and are reused
//!   by the next prepend.
//! * **Single accessor**: [`BlockList::value_at`] is the only "recent value"
//!   lookup; both the driver and the materializer go through it.
//!
//! ## Key concepts
//!
//! * **Block**: inclusive range `[start, end]` whose fitted value is the mean
//!   of the original values it has absorbed.
//! * **Identity positions**: indices outside every block keep their raw value
//!   and are never materialized as blocks.
//!
//! ## Invariants
//!
//! * Reachable blocks are ordered by ascending `start` and pairwise disjoint.
//! * `avg` is recomputed in the same call that changes `sum` or `count`.
//! * Only the head block ever grows backward, so backward growth never needs
//!   a merge check.
//!
//! ## Non-goals
//!
//! * This module does not decide when to pool; that is the driver's job.
//! * This module does not support weighted observations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

/// Index of a block inside a [`BlockList`] arena.
pub type BlockId = usize;

// ============================================================================
// Block
// ============================================================================

/// A contiguous range of original indices pooled into a single fitted value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<T> {
    /// First index covered (inclusive).
    pub start: usize,

    /// Last index covered (inclusive).
    pub end: usize,

    /// Running sum of the absorbed original values.
    pub sum: T,

    /// Number of absorbed original values.
    pub count: usize,

    /// Fitted value: `sum / count`.
    pub avg: T,

    /// Successor block (the next region to the right), if any.
    pub next: Option<BlockId>,

    // `count` mirrored in `T` so the mean never needs a fallible cast.
    weight: T,
}

impl<T: Float> Block<T> {
    fn empty(index: usize, next: Option<BlockId>) -> Self {
        Self {
            start: index,
            end: index,
            sum: T::zero(),
            count: 0,
            avg: T::zero(),
            next,
            weight: T::zero(),
        }
    }

    /// Whether `index` lies inside `[start, end]`.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Number of indices spanned by the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false: a block spans at least one index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn absorb(&mut self, value: T) {
        self.sum = self.sum + value;
        self.count += 1;
        self.weight = self.weight + T::one();
        self.avg = self.sum / self.weight;
    }
}

// ============================================================================
// Block List
// ============================================================================

/// Ordered, singly linked list of blocks backed by an index arena.
#[derive(Debug, Clone, Default)]
pub struct BlockList<T> {
    slots: Vec<Block<T>>,
    free: Vec<BlockId>,
    head: Option<BlockId>,
}

impl<T: Float> BlockList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
        }
    }

    /// Leftmost block, if any.
    #[inline]
    pub fn head(&self) -> Option<BlockId> {
        self.head
    }

    /// Borrow a block by id.
    #[inline]
    pub fn get(&self, id: BlockId) -> &Block<T> {
        &self.slots[id]
    }

    /// Successor of `id` in list order.
    #[inline]
    pub fn next_of(&self, id: BlockId) -> Option<BlockId> {
        self.slots[id].next
    }

    /// Number of blocks reachable from the head.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the list holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterate reachable blocks from left to right.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Open a new empty block covering `index` and link it as the new head.
    ///
    /// The block has `count == 0` until the first value is absorbed.
    pub fn prepend(&mut self, index: usize) -> BlockId {
        let block = Block::empty(index, self.head);
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id] = block;
                id
            }
            None => {
                self.slots.push(block);
                self.slots.len() - 1
            }
        };
        self.head = Some(id);
        id
    }

    /// Absorb `value` and widen the block's start down to `new_start`.
    pub fn extend_backward(&mut self, id: BlockId, value: T, new_start: usize) {
        let block = &mut self.slots[id];
        debug_assert!(new_start <= block.start);
        block.absorb(value);
        block.start = new_start;
    }

    /// Absorb `value` and widen the block's end up to `new_end`.
    ///
    /// When the successor already covers `new_end` the two ranges have met;
    /// the successor is merged in instead and `value` is not added twice.
    pub fn extend_forward(&mut self, id: BlockId, value: T, new_end: usize) {
        if let Some(next) = self.slots[id].next {
            if self.slots[next].contains(new_end) {
                self.merge(id, next);
                return;
            }
        }

        let block = &mut self.slots[id];
        block.absorb(value);
        block.end = new_end;
    }

    /// Fold `successor` into `id` and unlink it.
    pub fn merge(&mut self, id: BlockId, successor: BlockId) {
        let absorbed = self.slots[successor];
        let block = &mut self.slots[id];
        debug_assert_eq!(block.next, Some(successor));

        block.end = absorbed.end;
        block.sum = block.sum + absorbed.sum;
        block.count += absorbed.count;
        block.weight = block.weight + absorbed.weight;
        block.avg = block.sum / block.weight;
        block.next = absorbed.next;

        self.free.push(successor);

        #[cfg(feature = "tracing-log")]
        tracing::trace!(
            start = block.start,
            end = block.end,
            avg = block.avg.to_f64().unwrap_or(f64::NAN),
            "merged adjacent blocks"
        );
    }

    /// Recent value of index `i`.
    ///
    /// Returns the average of block `at` when its range contains `i`,
    /// otherwise the raw `x[i]`. Pass [`head`](Self::head) or a successor id
    /// to choose which block is consulted.
    #[inline]
    pub fn value_at(&self, at: Option<BlockId>, x: &[T], i: usize) -> T {
        match at {
            Some(id) if self.slots[id].contains(i) => self.slots[id].avg,
            _ => x[i],
        }
    }
}

// ============================================================================
// Iteration
// ============================================================================

/// Iterator over the blocks of a [`BlockList`], left to right.
pub struct Iter<'a, T> {
    list: &'a BlockList<T>,
    cursor: Option<BlockId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Block<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let block = &self.list.slots[id];
        self.cursor = block.next;
        Some(block)
    }
}
