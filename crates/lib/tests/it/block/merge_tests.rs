use folio::{
    Block, BlockType,
    block::{merge_data, merge_data_or_fallback},
};

#[test]
fn test_markdown_absorbs_plain_text() {
    let merged = merge_data(&Block::paragraph("ab"), &Block::header("cd")).unwrap();
    assert_eq!(merged.markdown(), Some("abcd"));
    assert_eq!(merged.text(), None);
}

#[test]
fn test_plain_text_strips_markdown() {
    let merged = merge_data(&Block::header("cd"), &Block::paragraph("**x**")).unwrap();
    assert_eq!(merged.text(), Some("cdx"));
    assert_eq!(merged.markdown(), None);
}

#[test]
fn test_markdown_concatenates_markup_verbatim() {
    let merged = merge_data(
        &Block::list_item("_a_ ", false),
        &Block::paragraph("[b](u)"),
    )
    .unwrap();
    assert_eq!(merged.markdown(), Some("_a_ [b](u)"));
    assert_eq!(merged.block_type(), &BlockType::ListItem);
}

#[test]
fn test_plain_text_pairs_concatenate() {
    let merged = merge_data(&Block::header("a"), &Block::spacer()).unwrap();
    assert_eq!(merged.text(), Some("a"));
}

#[test]
fn test_merged_block_keeps_identity_and_position() {
    let first = Block::paragraph("one").with_position(42.0);
    let merged = merge_data(&first, &Block::paragraph("two")).unwrap();
    assert_eq!(merged.key(), first.key());
    assert_eq!(merged.position(), 42.0);
}

#[test]
fn test_void_blocks_do_not_merge() {
    let image = Block::image("a.png");
    assert!(merge_data(&image, &Block::paragraph("x")).is_none());
    assert!(merge_data(&Block::paragraph("x"), &image).is_none());
    assert!(merge_data(&image, &Block::embed("https://example.com")).is_none());
}

#[test]
fn test_fallback_prefers_the_textual_block() {
    let image = Block::image("a.png");
    let paragraph = Block::paragraph("keep");

    assert_eq!(merge_data_or_fallback(&paragraph, &image), paragraph);
    assert_eq!(merge_data_or_fallback(&image, &paragraph), paragraph);
}

#[test]
fn test_fallback_substitutes_spacer_for_two_void_blocks() {
    let image = Block::image("a.png").with_position(7.0);
    let embed = Block::embed("https://example.com");

    let fallback = merge_data_or_fallback(&image, &embed);
    assert_eq!(fallback.block_type(), &BlockType::Spacer);
    assert_eq!(fallback.position(), 7.0);
    assert_ne!(fallback.id(), image.id());
    assert_eq!(fallback.text(), Some(""));
}
