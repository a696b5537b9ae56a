use std::sync::Arc;

use folio::{
    Block, Editor,
    config::EditorConfig,
    editor::InsertAt,
    storage::{InMemoryStore, SnapshotStore},
};

use super::helpers::*;
use crate::helpers::markdowns;

#[tokio::test]
async fn test_boot_loads_the_stored_snapshot() {
    let mut editor = editor_on(seeded_memory_store());
    editor.boot().await.unwrap();

    assert!(editor.is_writable());
    assert_eq!(markdowns(editor.blocks()), vec!["one", "two"]);
}

#[tokio::test]
async fn test_edits_are_written_back() {
    let store = seeded_memory_store();
    let mut editor = editor_on(store.clone());
    editor.boot().await.unwrap();

    let first = editor.blocks()[0].clone();
    editor.insert(Block::paragraph("between"), InsertAt::After(first.key().clone()));
    let last = editor.blocks()[2].key().clone();
    editor.remove(&last);
    editor.flush().await.unwrap();

    let reloaded = {
        let mut editor = editor_on(store.clone());
        editor.boot().await.unwrap();
        editor
    };
    assert_eq!(markdowns(reloaded.blocks()), vec!["one", "between"]);
    assert_eq!(
        store.load(DOCUMENT_ID).await.unwrap(),
        *editor.document().committed_snapshot()
    );
}

#[tokio::test]
async fn test_edits_before_boot_are_written_back() {
    let store = seeded_memory_store();
    let mut editor = editor_on(store.clone());

    editor.insert(Block::paragraph("early"), InsertAt::AfterSelection(vec![]));
    editor.boot().await.unwrap();
    editor.flush().await.unwrap();

    let stored = store.load(DOCUMENT_ID).await.unwrap();
    assert_eq!(stored.len(), editor.blocks().len());
    assert_eq!(stored, *editor.document().committed_snapshot());
    assert_eq!(markdowns(editor.blocks()), vec!["one", "two", "early"]);
}

#[tokio::test]
async fn test_file_round_trip() {
    let (dir, _) = file_store();
    let config = EditorConfig::local(DOCUMENT_ID, dir.path());

    let mut editor = Editor::new(config.clone());
    editor.boot_or_create().await.unwrap();
    editor.insert(Block::header("Title"), InsertAt::AfterSelection(vec![]));
    editor.insert(Block::paragraph("body"), InsertAt::AfterSelection(vec![]));
    editor.flush().await.unwrap();

    let mut reopened = Editor::new(config);
    reopened.boot().await.unwrap();
    let texts: Vec<_> = reopened
        .blocks()
        .iter()
        .filter_map(|b| b.text_content())
        .collect();
    assert_eq!(texts, vec!["Title", "body"]);
}

#[tokio::test]
async fn test_missing_document_leaves_editor_read_only() {
    let store = Arc::new(InMemoryStore::new());
    let mut editor = editor_on(store.clone());

    let err = editor.boot().await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!editor.is_writable());
    assert!(editor.blocks().is_empty());

    editor.insert(Block::paragraph("local only"), InsertAt::AfterSelection(vec![]));
    editor.flush().await.unwrap();
    assert!(store.document_ids().await.is_empty());
}

#[tokio::test]
async fn test_boot_or_create_starts_empty_document() {
    let store = Arc::new(InMemoryStore::new());
    let mut editor = editor_on(store.clone());

    editor.boot_or_create().await.unwrap();
    assert!(editor.is_writable());

    editor.insert(Block::paragraph("first"), InsertAt::AfterSelection(vec![]));
    editor.flush().await.unwrap();
    assert_eq!(store.load(DOCUMENT_ID).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_non_persistent_editor_never_writes() {
    let store = seeded_memory_store();
    let mut editor = Editor::with_store(
        EditorConfig::default()
            .with_document_id(DOCUMENT_ID)
            .with_persistent(false),
        store.clone(),
    );
    editor.boot().await.unwrap();
    assert!(!editor.is_writable());

    let first = editor.blocks()[0].key().clone();
    editor.remove(&first);
    editor.flush().await.unwrap();
    assert_eq!(store.load(DOCUMENT_ID).await.unwrap(), seed_snapshot());
}

#[tokio::test]
async fn test_editor_without_document_is_inert() {
    let mut editor = Editor::default();
    editor.boot().await.unwrap();
    assert!(!editor.is_writable());
    assert!(editor.blocks().is_empty());
}

#[tokio::test]
async fn test_shadow_flush_is_persisted() {
    let store = seeded_memory_store();
    let mut editor = editor_on(store.clone());
    editor.boot().await.unwrap();

    let target = editor.blocks()[1].clone();
    editor.shadow_block(&target, Block::header("preview"));
    editor.flush().await.unwrap();
    assert_eq!(store.load(DOCUMENT_ID).await.unwrap(), seed_snapshot());

    assert!(editor.shadow_flush());
    editor.flush().await.unwrap();
    let stored = store.load(DOCUMENT_ID).await.unwrap();
    assert!(!stored.contains_key(&target.key().to_string()));
    assert_eq!(stored.len(), 2);
}
