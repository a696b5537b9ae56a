//! The shadow overlay: one uncommitted fragment composited over the log.

use super::{FragmentLog, reducer::ordered_view};
use crate::{
    block::{Block, BlockKey},
    crdt::{Doc, TombstonePolicy},
};

/// A single speculative fragment held outside the log.
///
/// Deltas merged into the overlay keep their tombstones, so the overlay can
/// hide committed blocks from the composed view without touching the log.
/// [`ShadowOverlay::flush`] commits the overlay as one fragment;
/// [`ShadowOverlay::clear`] throws it away. There is only ever one overlay;
/// merging composes into it rather than stacking.
#[derive(Debug, Clone, Default)]
pub struct ShadowOverlay {
    delta: Doc,
    revision: u64,
}

impl ShadowOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Composes `delta` into the overlay.
    pub fn merge(&mut self, delta: &Doc) {
        tracing::debug!(keys = delta.entries().count(), "merging into shadow overlay");
        self.delta.merge(delta, TombstonePolicy::Retain);
        self.revision += 1;
    }

    /// Discards the overlay without touching the log.
    pub fn clear(&mut self) {
        if self.delta.is_empty() {
            return;
        }
        tracing::debug!("clearing shadow overlay");
        self.delta = Doc::new();
        self.revision += 1;
    }

    /// Pushes the overlay onto `log` as one fragment and clears it.
    ///
    /// Returns whether a fragment was pushed.
    pub fn flush(&mut self, log: &mut FragmentLog) -> bool {
        if self.delta.is_empty() {
            return false;
        }
        tracing::debug!("flushing shadow overlay");
        self.revision += 1;
        log.push(std::mem::take(&mut self.delta))
    }

    /// The live blocks in the overlay, in position order.
    ///
    /// Partial deltas without a position sort first.
    pub fn read(&self) -> Vec<Block> {
        ordered_view(&self.delta)
    }

    /// The keys the overlay deletes
    pub fn tombstones(&self) -> Vec<BlockKey> {
        self.delta
            .tombstones()
            .filter_map(|key| BlockKey::parse(key).ok())
            .collect()
    }

    /// The raw overlay, tombstones included
    pub fn delta(&self) -> &Doc {
        &self.delta
    }

    pub fn is_empty(&self) -> bool {
        self.delta.is_empty()
    }

    /// Counter bumped on every change
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
