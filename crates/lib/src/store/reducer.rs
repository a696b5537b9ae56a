//! Folding the fragment log into a snapshot.

use super::FragmentLog;
use crate::{block::Block, crdt::Doc};

/// Incrementally folds a [`FragmentLog`] into a snapshot of live blocks.
///
/// Each call to [`SnapshotReducer::reduce`] applies only the fragments it
/// has not seen yet, one at a time with tombstones applied. When the log's
/// base snapshot has been replaced, the reducer starts over from an empty
/// snapshot and replays the whole log, which gives the same result as
/// having folded incrementally all along.
#[derive(Debug, Clone, Default)]
pub struct SnapshotReducer {
    snapshot: Doc,
    processed: usize,
    revision: u64,
}

impl SnapshotReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the snapshot up to date with `log`.
    ///
    /// Returns whether anything was applied.
    pub fn reduce(&mut self, log: &FragmentLog) -> bool {
        if log.revision() != self.revision {
            tracing::debug!(
                revision = log.revision(),
                fragments = log.len(),
                "base snapshot replaced, replaying fragment log"
            );
            self.snapshot = Doc::new();
            self.processed = 0;
            self.revision = log.revision();
        }

        let pending = log.since(self.processed);
        if pending.is_empty() {
            return false;
        }
        tracing::trace!(
            from = self.processed,
            count = pending.len(),
            "folding fragments"
        );
        self.snapshot.apply_all(pending);
        self.processed = log.len();
        true
    }

    /// The folded snapshot: live payloads only, no tombstones
    pub fn snapshot(&self) -> &Doc {
        &self.snapshot
    }

    /// Number of log slots folded so far
    pub fn processed(&self) -> usize {
        self.processed
    }
}

/// Turns a snapshot into its position-ordered list of blocks.
///
/// Entries whose key does not parse or whose payload is not a map are
/// skipped with a warning. Equal positions fall back to key order so the
/// view is deterministic.
pub fn ordered_view(snapshot: &Doc) -> Vec<Block> {
    let mut blocks: Vec<Block> = snapshot
        .iter()
        .filter_map(|(key, value)| match Block::from_raw(key, value) {
            Ok(block) => Some(block),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "skipping malformed snapshot entry");
                None
            }
        })
        .collect();
    blocks.sort_by(|a, b| {
        a.position()
            .total_cmp(&b.position())
            .then_with(|| a.key().cmp(b.key()))
    });
    blocks
}
