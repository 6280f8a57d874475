use std::sync::Arc;

use crate::model::{Block, BlockId, BlockPatch};

/// Single source of truth for the ordered block collection. All structural
/// mutation is funneled through it so every consumer observes the same
/// sequence of snapshots.
///
/// Mutations never edit a snapshot in place: each one builds a new
/// `Arc<[Block]>` and bumps the revision, so consumers holding a previous
/// snapshot can detect change with `Arc::ptr_eq` (or by comparing
/// revisions). Operations referencing a vanished id are silent no-ops —
/// they reflect a harmless race with a stale handler reference, not an
/// error.
#[derive(Debug, Clone)]
pub struct BlockStore {
    blocks: Arc<[Block]>,
    revision: u64,
}

impl BlockStore {
    /// A store seeded with one empty default-variant block. The collection
    /// is never empty.
    pub fn new() -> BlockStore {
        BlockStore {
            blocks: Arc::from(vec![Block::default_block()]),
            revision: 0,
        }
    }

    /// A store seeded with the given blocks; an empty seed falls back to
    /// the single default block.
    pub fn with_blocks(blocks: Vec<Block>) -> BlockStore {
        if blocks.is_empty() {
            return BlockStore::new();
        }
        BlockStore {
            blocks: Arc::from(blocks),
            revision: 0,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Cheaply cloneable immutable snapshot of the current collection.
    pub fn snapshot(&self) -> Arc<[Block]> {
        Arc::clone(&self.blocks)
    }

    /// Bumped once per committed mutation; unchanged by no-ops.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        // The non-empty invariant makes this always false; kept for the
        // conventional len/is_empty pair.
        self.blocks.is_empty()
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    fn commit(&mut self, blocks: Vec<Block>) {
        debug_assert!(!blocks.is_empty());
        self.blocks = Arc::from(blocks);
        self.revision += 1;
    }

    /// Insert `block` immediately after the block with id `after`, or at
    /// the end when `after` is `None` or not found.
    pub fn insert_after(&mut self, block: Block, after: Option<BlockId>) {
        let mut blocks: Vec<Block> = self.blocks.to_vec();
        match after.and_then(|id| self.position(id)) {
            Some(index) => blocks.insert(index + 1, block),
            None => blocks.push(block),
        }
        self.commit(blocks);
    }

    /// Remove the block with matching id, preserving the order of the
    /// rest. Removing the sole block substitutes a fresh default-variant
    /// block instead, unless the sole block already is the default
    /// variant.
    pub fn remove(&mut self, id: BlockId) {
        let Some(index) = self.position(id) else {
            return;
        };
        if self.blocks.len() == 1 {
            if self.blocks[0].is_default_variant() {
                return;
            }
            self.commit(vec![Block::default_block()]);
            return;
        }
        let mut blocks: Vec<Block> = self.blocks.to_vec();
        blocks.remove(index);
        self.commit(blocks);
    }

    /// Swap the block with matching id for `block` at the same position.
    pub fn replace(&mut self, id: BlockId, block: Block) {
        let Some(index) = self.position(id) else {
            return;
        };
        let mut blocks: Vec<Block> = self.blocks.to_vec();
        blocks[index] = block;
        self.commit(blocks);
    }

    /// Merge the patch's present fields into the block with matching id.
    pub fn update(&mut self, patch: BlockPatch) {
        let Some(index) = self.position(patch.id) else {
            return;
        };
        let mut blocks: Vec<Block> = self.blocks.to_vec();
        patch.merge_into(&mut blocks[index]);
        self.commit(blocks);
    }

    /// Append `text` to the value of the block preceding the one with
    /// matching id. No-op when the block is first in the list or missing.
    /// Carries leftover caret content backward on merge-delete.
    pub fn append_to_previous(&mut self, id: BlockId, text: &str) {
        let Some(index) = self.position(id) else {
            return;
        };
        if index == 0 {
            return;
        }
        let mut blocks: Vec<Block> = self.blocks.to_vec();
        blocks[index - 1].value.push_str(text);
        self.commit(blocks);
    }
}

impl Default for BlockStore {
    fn default() -> Self {
        BlockStore::new()
    }
}
