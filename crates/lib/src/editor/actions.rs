//! Editing actions.
//!
//! Each action receives blocks whose content has already been read out of
//! the UI, builds one fragment (or one overlay delta) and applies it. A
//! committed fragment is persisted right away.

use tracing::debug;

use super::Editor;
use crate::{
    block::{Block, BlockKey, BlockType, merge_data, merge_data_or_fallback},
    crdt::Doc,
};

/// Where [`Editor::insert`] places a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertAt {
    /// Right before this block
    Before(BlockKey),
    /// Right after this block
    After(BlockKey),
    /// Right after the highest-positioned block of the selection, or after
    /// the tail when the selection is empty
    AfterSelection(Vec<BlockKey>),
}

fn key(block: &Block) -> String {
    block.key().to_string()
}

impl Editor {
    /// Merges `block2` into `block1` and deletes `block2`.
    ///
    /// Returns `false` without pushing anything when the blocks' data cannot
    /// be merged.
    pub fn merge(&mut self, block1: &Block, block2: &Block) -> bool {
        let Some(merged) = merge_data(block1, block2) else {
            debug!(block1 = %block1.key(), block2 = %block2.key(), "blocks cannot be merged");
            return false;
        };
        self.push(
            Doc::new()
                .with(key(&merged), merged.data(true))
                .with_tombstone(key(block2)),
        )
    }

    /// Splits a block in two.
    ///
    /// `head` is the block's content before the caret and `tail` the content
    /// after it, in the same kind. The tail becomes a new block right after
    /// the head. Returns the new block.
    pub fn split(&mut self, head: &Block, tail: &Block) -> Block {
        let position = self.document.insert_after_position(head.key());
        let split = tail.duplicate(position);
        self.push(
            Doc::new()
                .with(key(head), head.data(true))
                .with(key(&split), split.data(false)),
        );
        split
    }

    /// Like [`Editor::split`], but the new block is always a paragraph with
    /// the tail's content merged in.
    pub fn breakline(&mut self, head: &Block, tail: &Block) -> Block {
        let position = self.document.insert_after_position(head.key());
        let paragraph = Block::paragraph("").with_position(position);
        let paragraph = merge_data(&paragraph, tail).unwrap_or(paragraph);
        self.push(
            Doc::new()
                .with(key(head), head.data(true))
                .with(key(&paragraph), paragraph.data(false)),
        );
        paragraph
    }

    /// Collapses a selection spanning several blocks.
    ///
    /// `first` holds what is left of the first block before the selection and
    /// `last` what is left of the last block after it. They are merged (with
    /// the fallback, so the collapse always happens); `last`, every block in
    /// `middle` and, when the fallback replaced it, `first` are deleted.
    /// Returns the merged block.
    pub fn collapse(&mut self, first: &Block, last: &Block, middle: &[BlockKey]) -> Block {
        let merged = merge_data_or_fallback(first, last);

        let mut fragment = Doc::new().with_tombstone(key(last));
        for block_key in middle {
            fragment.delete(block_key.to_string());
        }
        if merged.key() != first.key() {
            fragment.delete(key(first));
        }
        fragment.set(key(&merged), merged.data(false));

        self.push(fragment);
        merged
    }

    /// Turns every selected block whose type differs from `template` into the
    /// template's kind, keeping its id and position and merging its content
    /// in. Content that cannot be merged is replaced by the template's.
    ///
    /// Returns the rebuilt blocks.
    pub fn swap(&mut self, selection: &[Block], template: &Block) -> Vec<Block> {
        let mut fragment = Doc::new();
        let mut swapped = Vec::new();

        for block in selection {
            if block.block_type() == template.block_type() {
                continue;
            }
            let rebuilt = template.duplicate(block.position()).with_id(block.id());
            let rebuilt = merge_data(&rebuilt, block).unwrap_or(rebuilt);

            fragment.delete(key(block));
            fragment.set(key(&rebuilt), rebuilt.data(false));
            swapped.push(rebuilt);
        }

        self.push(fragment);
        swapped
    }

    /// Inserts `block` at a position derived from its neighbours. Returns the
    /// block as placed.
    pub fn insert(&mut self, block: Block, at: InsertAt) -> Block {
        let position = match &at {
            InsertAt::Before(anchor) => self.document.insert_before_position(anchor),
            InsertAt::After(anchor) => self.document.insert_after_position(anchor),
            InsertAt::AfterSelection(selection) => {
                self.document.insert_after_selection_position(selection)
            }
        };
        let block = block.with_position(position);
        self.push(block.to_fragment());
        block
    }

    /// Deletes a block.
    pub fn remove(&mut self, block_key: &BlockKey) -> bool {
        self.push(Doc::new().with_tombstone(block_key.to_string()))
    }

    /// Replaces `block1` with `block2`, which takes over `block1`'s position.
    pub fn replace(&mut self, block1: &Block, block2: Block) -> Block {
        let replacement = block2.with_position(block1.position());
        self.push(
            Doc::new()
                .with_tombstone(key(block1))
                .with(key(&replacement), replacement.data(false)),
        );
        replacement
    }

    /// Merges `fields` into a block, committed or as a preview in the
    /// shadow overlay.
    pub fn update(&mut self, block_key: &BlockKey, fields: Doc, shadow: bool) -> bool {
        let fragment = Doc::new().with(block_key.to_string(), fields);
        if shadow {
            self.document.shadow_merge(&fragment);
            true
        } else {
            self.push(fragment)
        }
    }

    // Shadow actions

    /// Previews `shadow` in place of `block`: the overlay hides `block` and
    /// shows `shadow` at its position. Returns the shadow block as placed.
    pub fn shadow_block(&mut self, block: &Block, shadow: Block) -> Block {
        let shadow = shadow.with_position(block.position());
        self.document.shadow_merge(
            &Doc::new()
                .with_tombstone(key(block))
                .with(key(&shadow), shadow.data(false)),
        );
        shadow
    }

    /// Merges `fields` into the first live shadow block, then optionally
    /// commits the overlay.
    ///
    /// Returns `false` when the overlay shows no block.
    pub fn shadow_update(&mut self, fields: Doc, flush: bool) -> bool {
        let Some(shadow) = self.document.overlay().read().into_iter().next() else {
            debug!("no shadow block to update");
            return false;
        };
        self.document
            .shadow_merge(&Doc::new().with(key(&shadow), fields));
        if flush {
            self.shadow_flush();
        }
        true
    }

    /// Swaps the first live shadow block for `block` at the same position,
    /// then optionally commits the overlay.
    ///
    /// Returns the replacement, or `None` when the overlay shows no block.
    pub fn shadow_replace(&mut self, block: Block, flush: bool) -> Option<Block> {
        let shadow = self.document.overlay().read().into_iter().next()?;
        let replacement = block.with_position(shadow.position());
        self.document.shadow_merge(
            &Doc::new()
                .with_tombstone(key(&shadow))
                .with(key(&replacement), replacement.data(false)),
        );
        if flush {
            self.shadow_flush();
        }
        Some(replacement)
    }

    /// Commits the shadow overlay as one fragment.
    pub fn shadow_flush(&mut self) -> bool {
        let pushed = self.document.shadow_flush();
        if pushed {
            self.persist();
        }
        pushed
    }

    /// Discards the shadow overlay.
    ///
    /// Returns the committed block the overlay was hiding (the first one in
    /// position order, if several), so callers can restore focus to it.
    pub fn shadow_clear(&mut self) -> Option<Block> {
        let hidden = self.document.overlay().tombstones();
        let restored = self
            .document
            .committed()
            .iter()
            .find(|block| hidden.contains(block.key()))
            .cloned();
        self.document.shadow_clear();
        restored
    }

    /// Opens a prompt over the selection.
    ///
    /// Reuses the first selected spacer, or commits a new spacer right after
    /// the selection, then previews a prompt block in its place. Returns the
    /// prompt block.
    pub fn prompt(&mut self, placeholder: &str, selection: &[BlockKey]) -> Block {
        let spacers: Vec<BlockKey> = selection
            .iter()
            .filter(|k| k.block_type == BlockType::Spacer)
            .cloned()
            .collect();

        let spacer = match self.document.first(&spacers).cloned() {
            Some(spacer) => spacer,
            None => {
                let position = self.document.insert_after_selection_position(selection);
                let spacer = Block::spacer().with_position(position);
                self.push(spacer.to_fragment());
                spacer
            }
        };

        self.shadow_block(&spacer, Block::prompt(placeholder))
    }
}
