use folio::{Block, position::position_between};

use super::helpers::document_of;
use crate::helpers::{assert_strictly_ordered, markdowns};

#[test]
fn test_repeated_inserts_after_a_fixed_block() {
    let (mut document, blocks) = document_of(&["head", "tail"]);
    let head = blocks[0].key().clone();

    // Every insert lands right after `head`, so the newest comes first
    let mut expected = vec!["head"];
    let labels = ["n1", "n2", "n3", "n4", "n5", "n6"];
    for label in labels {
        let position = document.insert_after_position(&head);
        let before = document.position_of(&head).unwrap();
        let after = document.next(&head).unwrap().position();
        assert!(before < position && position < after, "{position} not in ({before}, {after})");

        document.push(Block::paragraph(label).with_position(position).to_fragment());
    }
    expected.extend(labels.iter().rev());
    expected.push("tail");

    assert_eq!(markdowns(document.blocks()), expected);
    assert_strictly_ordered(document.blocks());
}

#[test]
fn test_appending_keeps_insertion_order() {
    let (mut document, _) = document_of(&[]);
    let labels = ["a", "b", "c", "d"];
    for label in labels {
        let tail = document.blocks().last().map(|b| b.key().clone());
        let position = match tail {
            Some(key) => document.insert_after_position(&key),
            None => position_between(None, None),
        };
        document.push(Block::paragraph(label).with_position(position).to_fragment());
    }
    assert_eq!(markdowns(document.blocks()), labels);
    assert_strictly_ordered(document.blocks());
}

#[test]
fn test_prepending_keeps_reverse_order() {
    let (mut document, blocks) = document_of(&["last"]);
    let mut head = blocks[0].key().clone();
    for label in ["c", "b", "a"] {
        let block = Block::paragraph(label).with_position(document.insert_before_position(&head));
        document.push(block.to_fragment());
        head = block.key().clone();
    }
    assert_eq!(markdowns(document.blocks()), vec!["a", "b", "c", "last"]);
    assert_strictly_ordered(document.blocks());
}
