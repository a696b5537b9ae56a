//! The append-only fragment log.

use crate::crdt::Doc;

/// An append-only sequence of partial documents.
///
/// Slot 0 always exists and holds the base snapshot (loaded from storage,
/// empty until then). Every later slot is a delta pushed by an edit.
/// Entries are never reordered or dropped; the only way to rewrite history
/// is to replace the base, which bumps [`FragmentLog::revision`] so that
/// reducers know to replay from the start.
#[derive(Debug, Clone)]
pub struct FragmentLog {
    fragments: Vec<Doc>,
    revision: u64,
}

impl Default for FragmentLog {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentLog {
    /// Creates a log holding only an empty base snapshot.
    pub fn new() -> Self {
        Self {
            fragments: vec![Doc::new()],
            revision: 0,
        }
    }

    /// Appends a fragment. Empty fragments are ignored.
    ///
    /// Returns whether the log changed.
    pub fn push(&mut self, fragment: Doc) -> bool {
        if fragment.is_empty() {
            tracing::trace!("ignoring empty fragment");
            return false;
        }
        tracing::debug!(
            index = self.fragments.len(),
            keys = fragment.entries().count(),
            "pushing fragment"
        );
        self.fragments.push(fragment);
        true
    }

    /// Replaces the base snapshot, keeping every delta.
    ///
    /// Meant to be called once, when the document is loaded.
    pub fn register(&mut self, base: Doc) {
        tracing::debug!(keys = base.len(), "registering base snapshot");
        self.fragments[0] = base;
        self.revision += 1;
    }

    /// Resets the log to a single base snapshot.
    pub fn init(&mut self, base: Doc) {
        tracing::debug!(keys = base.len(), "resetting fragment log");
        self.fragments = vec![base];
        self.revision += 1;
    }

    /// Number of slots, base included
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// True when nothing has been pushed since the base
    pub fn is_empty(&self) -> bool {
        self.fragments.len() == 1
    }

    pub fn base(&self) -> &Doc {
        &self.fragments[0]
    }

    pub fn fragments(&self) -> &[Doc] {
        &self.fragments
    }

    /// The fragments from `index` on, for incremental consumers.
    ///
    /// An index past the end yields an empty slice.
    pub fn since(&self, index: usize) -> &[Doc] {
        self.fragments.get(index..).unwrap_or_default()
    }

    /// Counter bumped whenever the base snapshot is replaced
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
