/*!
 * Block Store Implementation
 * Owns the fixed partitions; capacities only mutate through the engine
 */

use crate::core::types::{BlockIndex, Size};
use serde::{Deserialize, Serialize};

/// A fixed-capacity memory partition with mutable free capacity
///
/// `total` is immutable after construction; `free` always satisfies
/// `0 <= free <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    total: Size,
    free: Size,
}

impl Block {
    fn new(total: Size) -> Self {
        Self { total, free: total }
    }

    pub fn total(&self) -> Size {
        self.total
    }

    pub fn free(&self) -> Size {
        self.free
    }

    pub fn used(&self) -> Size {
        self.total - self.free
    }
}

/// Ordered sequence of blocks, fixed length and capacities chosen at
/// construction time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStore {
    blocks: Vec<Block>,
}

impl BlockStore {
    /// Create a store from per-block total capacities
    ///
    /// # Panics
    /// Panics if any capacity is zero; the topology is a construction-time
    /// decision and a zero-capacity partition is a configuration defect.
    pub fn new(capacities: &[Size]) -> Self {
        assert!(
            capacities.iter().all(|&total| total > 0),
            "block capacities must be positive"
        );
        Self {
            blocks: capacities.iter().map(|&total| Block::new(total)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: BlockIndex) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Snapshot of current free capacities, in index order
    pub fn free_snapshot(&self) -> Vec<Size> {
        self.blocks.iter().map(|block| block.free).collect()
    }

    /// Reduce a block's free capacity after a successful placement
    pub(crate) fn charge(&mut self, index: BlockIndex, size: Size) {
        let block = &mut self.blocks[index];
        debug_assert!(
            block.free >= size,
            "charge of {} exceeds free capacity {} in block {}",
            size,
            block.free,
            index
        );
        block.free -= size;
    }

    /// Return freed capacity to a block, capped at its total to guard
    /// against accounting drift
    pub(crate) fn credit(&mut self, index: BlockIndex, size: Size) {
        let block = &mut self.blocks[index];
        block.free = (block.free + size).min(block.total);
    }

    /// Restore every block's free capacity to its total
    pub(crate) fn reset(&mut self) {
        for block in &mut self.blocks {
            block.free = block.total;
        }
    }
}
