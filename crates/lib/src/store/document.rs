//! A document: one fragment log, one shadow overlay and their views.

use super::{FragmentLog, ShadowOverlay, SnapshotReducer, reducer::ordered_view};
use crate::{
    block::{Block, BlockKey},
    crdt::{Doc, TombstonePolicy},
    position::position_between,
};

/// Owns the fragment log and shadow overlay of one document and keeps the
/// ordered views of both up to date.
///
/// All mutation goes through the methods here; each of them refreshes the
/// views before returning, so reads always see the latest state.
///
/// - [`Document::committed`] is the log folded on its own.
/// - [`Document::blocks`] is the log with the shadow overlay applied on top,
///   the view consumers render.
///
/// # Example
///
/// ```
/// use folio::{Block, Document};
///
/// let mut document = Document::new();
/// let first = Block::paragraph("first");
/// document.push(first.to_fragment());
///
/// let position = document.insert_after_position(first.key());
/// document.push(Block::paragraph("second").with_position(position).to_fragment());
///
/// let texts: Vec<_> = document.blocks().iter().map(|b| b.markdown().unwrap()).collect();
/// assert_eq!(texts, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    log: FragmentLog,
    overlay: ShadowOverlay,
    reducer: SnapshotReducer,
    /// Committed snapshot with the overlay applied
    composed: Doc,
    committed_view: Vec<Block>,
    view: Vec<Block>,
    overlay_revision: u64,
}

impl Document {
    pub fn new() -> Self {
        let mut document = Self::default();
        document.refresh();
        document
    }

    /// Creates a document whose base snapshot is `base`.
    pub fn from_base(base: Doc) -> Self {
        let mut document = Self::default();
        document.log.init(base);
        document.refresh();
        document
    }

    // Mutation

    /// Appends a fragment to the log. Empty fragments are ignored.
    pub fn push(&mut self, fragment: Doc) -> bool {
        let pushed = self.log.push(fragment);
        self.refresh();
        pushed
    }

    /// Replaces the base snapshot; the views are replayed from scratch.
    pub fn register(&mut self, base: Doc) {
        self.log.register(base);
        self.refresh();
    }

    /// Resets the log to `base`, dropping every delta.
    pub fn init(&mut self, base: Doc) {
        self.log.init(base);
        self.refresh();
    }

    /// Composes `delta` into the shadow overlay.
    pub fn shadow_merge(&mut self, delta: &Doc) {
        self.overlay.merge(delta);
        self.refresh();
    }

    /// Discards the shadow overlay.
    pub fn shadow_clear(&mut self) {
        self.overlay.clear();
        self.refresh();
    }

    /// Commits the shadow overlay as one fragment.
    pub fn shadow_flush(&mut self) -> bool {
        let pushed = self.overlay.flush(&mut self.log);
        self.refresh();
        pushed
    }

    /// Folds whatever the views have not seen yet.
    ///
    /// The committed snapshot is folded incrementally; the composed snapshot
    /// is rebuilt only when either side changed.
    pub fn refresh(&mut self) {
        let committed_changed = self.reducer.reduce(&self.log);
        let overlay_changed = self.overlay.revision() != self.overlay_revision;
        if !committed_changed && !overlay_changed {
            return;
        }

        if committed_changed {
            self.committed_view = ordered_view(self.reducer.snapshot());
        }
        if self.overlay.is_empty() {
            self.composed = self.reducer.snapshot().clone();
            self.view = self.committed_view.clone();
        } else {
            self.composed = self
                .reducer
                .snapshot()
                .merged(self.overlay.delta(), TombstonePolicy::Apply);
            self.view = ordered_view(&self.composed);
        }
        self.overlay_revision = self.overlay.revision();
    }

    // Reads

    pub fn log(&self) -> &FragmentLog {
        &self.log
    }

    pub fn overlay(&self) -> &ShadowOverlay {
        &self.overlay
    }

    /// The ordered view with the shadow overlay applied
    pub fn blocks(&self) -> &[Block] {
        &self.view
    }

    /// The ordered view of committed state only
    pub fn committed(&self) -> &[Block] {
        &self.committed_view
    }

    /// The composed snapshot in wire form
    pub fn snapshot(&self) -> &Doc {
        &self.composed
    }

    /// The committed snapshot in wire form
    pub fn committed_snapshot(&self) -> &Doc {
        self.reducer.snapshot()
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    pub fn get(&self, key: &BlockKey) -> Option<&Block> {
        self.view.iter().find(|b| b.key() == key)
    }

    pub fn get_committed(&self, key: &BlockKey) -> Option<&Block> {
        self.committed_view.iter().find(|b| b.key() == key)
    }

    pub fn position_of(&self, key: &BlockKey) -> Option<f64> {
        self.get(key).map(Block::position)
    }

    fn index_of(&self, key: &BlockKey) -> Option<usize> {
        self.view.iter().position(|b| b.key() == key)
    }

    pub fn next(&self, key: &BlockKey) -> Option<&Block> {
        self.index_of(key).and_then(|i| self.view.get(i + 1))
    }

    pub fn previous(&self, key: &BlockKey) -> Option<&Block> {
        self.index_of(key)
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.view.get(i))
    }

    /// The first selected block in view order
    pub fn first(&self, selection: &[BlockKey]) -> Option<&Block> {
        self.view.iter().find(|b| selection.contains(b.key()))
    }

    /// The last selected block in view order
    pub fn last(&self, selection: &[BlockKey]) -> Option<&Block> {
        self.view.iter().rev().find(|b| selection.contains(b.key()))
    }

    // Positions

    fn tail_position(&self) -> f64 {
        position_between(self.view.last().map(Block::position), None)
    }

    /// A position between `key` and the block after it.
    ///
    /// A key missing from the view allocates after the tail.
    pub fn insert_after_position(&self, key: &BlockKey) -> f64 {
        match self.index_of(key) {
            Some(i) => position_between(
                Some(self.view[i].position()),
                self.view.get(i + 1).map(Block::position),
            ),
            None => self.tail_position(),
        }
    }

    /// A position between the block before `key` and `key`.
    ///
    /// A key missing from the view allocates before the head.
    pub fn insert_before_position(&self, key: &BlockKey) -> f64 {
        match self.index_of(key) {
            Some(i) => position_between(
                i.checked_sub(1).map(|p| self.view[p].position()),
                Some(self.view[i].position()),
            ),
            None => position_between(None, self.view.first().map(Block::position)),
        }
    }

    /// A position right after the highest-positioned selected block, or
    /// after the tail when nothing in `selection` is in the view.
    pub fn insert_after_selection_position(&self, selection: &[BlockKey]) -> f64 {
        match self.last(selection) {
            Some(anchor) => self.insert_after_position(anchor.key()),
            None => self.tail_position(),
        }
    }

    /// Pushes `block` right after the selection (see
    /// [`Document::insert_after_selection_position`]).
    ///
    /// Returns the block as placed.
    pub fn insert_after(&mut self, block: Block, selection: &[BlockKey]) -> Block {
        let position = self.insert_after_selection_position(selection);
        let block = block.with_position(position);
        self.push(block.to_fragment());
        block
    }
}
