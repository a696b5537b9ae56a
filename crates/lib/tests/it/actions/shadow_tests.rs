use folio::{Block, BlockType, crdt::Doc};

use super::helpers::*;

#[test]
fn test_shadow_update_previews_without_committing() {
    let (mut editor, blocks) = editor_with(vec![Block::paragraph("draft")]);
    let before = pushed(&editor);

    assert!(editor.update(
        blocks[0].key(),
        Doc::new().with("markdown", "preview"),
        true
    ));

    assert_eq!(contents(&editor), vec!["preview"]);
    assert_eq!(editor.document().committed()[0].markdown(), Some("draft"));
    assert_eq!(pushed(&editor), before);
}

#[test]
fn test_shadow_block_replaces_in_view_only() {
    let (mut editor, blocks) = editor_with(vec![Block::paragraph("a"), Block::paragraph("b")]);

    let shadow = editor.shadow_block(&blocks[0], Block::header("preview"));

    assert_eq!(shadow.position(), blocks[0].position());
    assert_eq!(contents(&editor), vec!["preview", "b"]);
    assert_eq!(editor.document().committed().len(), 2);
}

#[test]
fn test_shadow_update_and_flush_commits_once() {
    let (mut editor, blocks) = editor_with(vec![Block::paragraph("a")]);
    editor.shadow_block(&blocks[0], Block::header(""));
    let before = pushed(&editor);

    assert!(editor.shadow_update(Doc::new().with("text", "typed"), true));

    assert_eq!(pushed(&editor), before + 1);
    assert!(editor.document().overlay().is_empty());
    assert_eq!(contents(&editor), vec!["typed"]);
    assert_eq!(editor.document().committed()[0].block_type(), &BlockType::Header);
}

#[test]
fn test_shadow_update_without_shadow_block() {
    let (mut editor, _) = editor_with(vec![Block::paragraph("a")]);
    assert!(!editor.shadow_update(Doc::new().with("text", "x"), true));
    assert_eq!(pushed(&editor), 1);
}

#[test]
fn test_shadow_replace_swaps_the_preview() {
    let (mut editor, blocks) = editor_with(vec![Block::paragraph("a"), Block::paragraph("b")]);
    let shadow = editor.shadow_block(&blocks[1], Block::prompt("ask"));

    let replacement = editor
        .shadow_replace(Block::image("generated.png"), false)
        .unwrap();

    assert_eq!(replacement.position(), shadow.position());
    let view = editor.blocks();
    assert_eq!(view.len(), 2);
    assert_eq!(view[1].src(), Some("generated.png"));
    assert!(editor.document().get(shadow.key()).is_none());
    assert!(!editor.document().overlay().is_empty());
}

#[test]
fn test_shadow_clear_restores_hidden_block() {
    let (mut editor, blocks) = editor_with(vec![Block::paragraph("a"), Block::paragraph("b")]);
    let committed = editor.blocks().to_vec();
    editor.shadow_block(&blocks[1], Block::prompt("ask"));

    let restored = editor.shadow_clear().unwrap();

    assert_eq!(restored.key(), blocks[1].key());
    assert_eq!(editor.blocks(), committed.as_slice());
    assert!(editor.shadow_clear().is_none());
}

#[test]
fn test_prompt_commits_spacer_after_selection() {
    let (mut editor, blocks) = editor_with(vec![Block::paragraph("a"), Block::paragraph("b")]);

    let prompt = editor.prompt("Ask anything", &[blocks[0].key().clone()]);

    assert_eq!(prompt.placeholder(), Some("Ask anything"));
    assert_eq!(prompt.position(), 1500.0);

    let committed = editor.document().committed();
    assert_eq!(committed.len(), 3);
    assert_eq!(committed[1].block_type(), &BlockType::Spacer);

    let view = editor.blocks();
    assert_eq!(view.len(), 3);
    assert_eq!(view[1].key(), prompt.key());

    let restored = editor.shadow_clear().unwrap();
    assert_eq!(restored.key(), committed_spacer_key(&editor));
}

fn committed_spacer_key(editor: &folio::Editor) -> &folio::BlockKey {
    editor
        .document()
        .committed()
        .iter()
        .find(|b| b.block_type() == &BlockType::Spacer)
        .map(Block::key)
        .unwrap()
}

#[test]
fn test_prompt_reuses_selected_spacer() {
    let (mut editor, blocks) = editor_with(vec![Block::paragraph("a"), Block::spacer()]);
    let before = pushed(&editor);

    let prompt = editor.prompt("Ask", &[blocks[0].key().clone(), blocks[1].key().clone()]);

    assert_eq!(pushed(&editor), before);
    assert_eq!(prompt.position(), blocks[1].position());
    assert_eq!(editor.blocks()[1].key(), prompt.key());
}
