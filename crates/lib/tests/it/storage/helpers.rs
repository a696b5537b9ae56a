use std::sync::Arc;

use folio::{
    Editor,
    config::EditorConfig,
    crdt::Doc,
    storage::{FileStore, InMemoryStore, SnapshotStore},
};
use tempfile::TempDir;

use crate::helpers::paragraph_fields;

pub const DOCUMENT_ID: &str = "notes";

/// A snapshot with two paragraphs
pub fn seed_snapshot() -> Doc {
    Doc::new()
        .with("paragraph:one", paragraph_fields("one", 1000.0))
        .with("paragraph:two", paragraph_fields("two", 2000.0))
}

/// A file store in a fresh temporary directory
pub fn file_store() -> (TempDir, Arc<FileStore>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = Arc::new(FileStore::new(dir.path()));
    (dir, store)
}

/// An in-memory store seeded with [`seed_snapshot`]
pub fn seeded_memory_store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::with_document(DOCUMENT_ID, seed_snapshot()))
}

/// An editor for [`DOCUMENT_ID`] bound to `store`
pub fn editor_on(store: Arc<dyn SnapshotStore>) -> Editor {
    Editor::with_store(EditorConfig::default().with_document_id(DOCUMENT_ID), store)
}
