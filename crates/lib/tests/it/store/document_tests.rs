use folio::{
    Block, Document,
    crdt::Doc,
    store::{Entry, group_blocks},
};

use super::helpers::document_of;
use crate::helpers::{markdowns, paragraph_fields};

#[test]
fn test_base_snapshot_seeds_the_view() {
    let base = Doc::new()
        .with("paragraph:b", paragraph_fields("second", 2.0))
        .with("paragraph:a", paragraph_fields("first", 1.0));
    let document = Document::from_base(base);
    assert_eq!(markdowns(document.blocks()), vec!["first", "second"]);
}

#[test]
fn test_register_keeps_local_fragments() {
    let (mut document, blocks) = document_of(&["local"]);
    document.register(Doc::new().with("paragraph:remote", paragraph_fields("remote", 1.0)));

    assert_eq!(markdowns(document.blocks()), vec!["remote", "local"]);
    assert_eq!(document.get(blocks[0].key()).map(Block::position), Some(1000.0));
}

#[test]
fn test_init_drops_local_fragments() {
    let (mut document, _) = document_of(&["local"]);
    document.init(Doc::new().with("paragraph:remote", paragraph_fields("remote", 1.0)));

    assert_eq!(markdowns(document.blocks()), vec!["remote"]);
    assert_eq!(document.log().len(), 1);
}

#[test]
fn test_partial_delta_updates_in_place() {
    let (mut document, blocks) = document_of(&["a", "b"]);
    document.push(
        Doc::new().with(
            blocks[0].key().to_string(),
            Doc::new().with("position", 2500.0),
        ),
    );
    assert_eq!(markdowns(document.blocks()), vec!["b", "a"]);
    assert_eq!(document.previous(blocks[0].key()).map(Block::key), Some(blocks[1].key()));
}

#[test]
fn test_list_items_are_grouped() {
    let mut document = Document::new();
    let blocks = [
        Block::paragraph("intro").with_position(1.0),
        Block::list_item("one", true).with_position(2.0),
        Block::list_item("two", true).with_position(3.0),
        Block::list_item("bullet", false).with_position(4.0),
        Block::header("end").with_position(5.0),
    ];
    for block in &blocks {
        document.push(block.to_fragment());
    }

    let entries = group_blocks(document.blocks());
    assert_eq!(entries.len(), 4);
    match &entries[1] {
        Entry::List(group) => {
            assert!(group.ordered);
            assert_eq!(group.items.len(), 2);
            assert_eq!(group.key, format!("group-{}", blocks[1].key()));
        }
        other => panic!("expected an ordered list, got {other:?}"),
    }
    match &entries[2] {
        Entry::List(group) => assert!(!group.ordered),
        other => panic!("expected an unordered list, got {other:?}"),
    }
    let flat: usize = entries.iter().map(|e| e.blocks().len()).sum();
    assert_eq!(flat, blocks.len());
}
