use folio::{Block, Document, crdt::Doc};

use super::helpers::{document_of, mixed_delta};
use crate::helpers::{keys, markdowns};

#[test]
fn test_clear_leaves_committed_view_untouched() {
    let (mut document, blocks) = document_of(&["a", "b", "c"]);
    let before = document.blocks().to_vec();

    document.shadow_merge(&mixed_delta(&blocks));
    assert_ne!(document.blocks(), before.as_slice());
    assert_eq!(document.committed(), before.as_slice());

    document.shadow_clear();
    assert_eq!(document.blocks(), before.as_slice());
    assert_eq!(document.log().len(), 4);
}

#[test]
fn test_flush_equals_direct_push() {
    let (mut shadowed, blocks) = document_of(&["a", "b", "c"]);
    let mut direct = Document::from_base(Doc::new());
    for block in &blocks {
        direct.push(block.to_fragment());
    }

    let delta = mixed_delta(&blocks);
    shadowed.shadow_merge(&delta);
    assert!(shadowed.shadow_flush());
    direct.push(delta);

    assert_eq!(shadowed.blocks(), direct.blocks());
    assert_eq!(shadowed.committed_snapshot(), direct.committed_snapshot());
    assert!(shadowed.overlay().is_empty());
}

#[test]
fn test_overlay_view_reflects_delta() {
    let (mut document, blocks) = document_of(&["a", "b"]);
    document.shadow_merge(&mixed_delta(&blocks));

    let view = document.blocks();
    assert_eq!(view.len(), 2);
    assert_eq!(view[0].text(), Some("new"));
    assert_eq!(view[1].markdown(), Some("edited"));
    assert_eq!(view[1].position(), 2000.0);
}

#[test]
fn test_successive_merges_compose_into_one_overlay() {
    let (mut document, blocks) = document_of(&["a"]);
    let key = blocks[0].key().to_string();

    document.shadow_merge(&Doc::new().with(key.as_str(), Doc::new().with("markdown", "x")));
    document.shadow_merge(&Doc::new().with(key.as_str(), Doc::new().with("extra", true)));

    let block = &document.blocks()[0];
    assert_eq!(block.markdown(), Some("x"));
    assert_eq!(block.fields().get_as::<bool>("extra"), Some(true));

    assert!(document.shadow_flush());
    assert_eq!(document.log().len(), 3);
    assert!(!document.shadow_flush());
}

#[test]
fn test_overlay_reports_tombstones_and_live_blocks() {
    let (mut document, blocks) = document_of(&["a", "b"]);
    let preview = Block::prompt("ask").with_position(blocks[0].position());
    document.shadow_merge(
        &Doc::new()
            .with_tombstone(blocks[0].key().to_string())
            .with(preview.key().to_string(), preview.data(false)),
    );

    assert_eq!(document.overlay().tombstones(), vec![blocks[0].key().clone()]);
    assert_eq!(keys(&document.overlay().read()), vec![preview.key().clone()]);
    assert_eq!(markdowns(document.committed()), vec!["a", "b"]);
    assert_eq!(document.blocks()[0].placeholder(), Some("ask"));
}
