//! Combining the data of two adjacent blocks.
//!
//! Used by backspace-merge, collapse and breakline. The behaviour is picked
//! by matching on each block's [`Capability`]:
//!
//! | block1     | block2     | result                                     |
//! |------------|------------|--------------------------------------------|
//! | markdown   | markdown   | `markdown1 + markdown2`                    |
//! | markdown   | plain text | `markdown1 + text2` (no escaping)          |
//! | plain text | plain text | `text1 + text2`                            |
//! | plain text | markdown   | `text1 + plain_text(markdown2)`            |
//!
//! The result keeps `block1`'s identity, position and other fields.

use super::{Block, Capability};
use crate::{
    constants::{MARKDOWN, TEXT},
    markdown,
};

/// Merges `block2`'s text into `block1`.
///
/// Returns `None` when either block has no mergeable text; the caller decides
/// whether to reject the operation or substitute something else.
///
/// ```
/// # use folio::block::{Block, merge_data};
/// let merged = merge_data(&Block::header("cd"), &Block::paragraph("**x**")).unwrap();
/// assert_eq!(merged.text(), Some("cdx"));
/// assert!(merge_data(&Block::paragraph("a"), &Block::image("a.png")).is_none());
/// ```
pub fn merge_data(block1: &Block, block2: &Block) -> Option<Block> {
    let text1 = block1.text_content()?;
    let text2 = block2.text_content()?;

    let (field, merged) = match (block1.capability(), block2.capability()) {
        (Capability::Markdown, _) => (MARKDOWN, format!("{text1}{text2}")),
        (Capability::PlainText, Capability::Markdown) => {
            (TEXT, format!("{text1}{}", markdown::plain_text(text2)))
        }
        (Capability::PlainText, _) => (TEXT, format!("{text1}{text2}")),
        (Capability::Void, _) => return None,
    };

    Some(block1.clone().with_field(field, merged))
}

/// Like [`merge_data`], but always produces a block.
///
/// When the data cannot be merged, whichever block has text wins as-is
/// (`block1` first); if neither has text, a fresh spacer takes `block1`'s
/// position.
pub fn merge_data_or_fallback(block1: &Block, block2: &Block) -> Block {
    if let Some(merged) = merge_data(block1, block2) {
        return merged;
    }
    if block1.capability().is_textual() {
        return block1.clone();
    }
    if block2.capability().is_textual() {
        return block2.clone();
    }
    tracing::debug!(
        block1 = %block1.key(),
        block2 = %block2.key(),
        "no textual block to merge, substituting a spacer"
    );
    Block::spacer().with_position(block1.position())
}
