//! Persistence adapters.
//!
//! A [`SnapshotStore`] keeps one durable snapshot per document, in the same
//! wire shape as the in-memory fragment log. The editor hands it the
//! incremental slice of the log after every change; the store folds that
//! slice into its snapshot with exactly the merge the reducer uses, so
//! persisted state never diverges from live state.
//!
//! Writes go through a [`WriteQueue`], which applies them strictly in the
//! order they were produced.

use async_trait::async_trait;

use crate::{Result, crdt::Doc};

mod errors;
mod file;
mod memory;
mod queue;

pub use errors::StorageError;
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use queue::WriteQueue;

/// Durable storage for document snapshots.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the snapshot of `document_id`.
    ///
    /// Fails with [`StorageError::DocumentNotFound`] when nothing is stored.
    async fn load(&self, document_id: &str) -> Result<Doc>;

    /// Applies `fragments` in order to the stored snapshot, creating it if
    /// needed.
    async fn merge(&self, document_id: &str, fragments: &[Doc]) -> Result<()>;

    /// Replaces the stored snapshot.
    async fn save(&self, document_id: &str, snapshot: &Doc) -> Result<()>;
}
