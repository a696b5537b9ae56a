use folio::{Block, BlockKey, crdt::Doc};

// Re-export tokio test macro for convenience
pub use tokio;

/// A fragment setting one block's fields
pub fn set(key: &str, fields: Doc) -> Doc {
    Doc::new().with(key, fields)
}

/// A fragment deleting one block
pub fn tombstone(key: &str) -> Doc {
    Doc::new().with_tombstone(key)
}

/// A paragraph payload with a position
pub fn paragraph_fields(markdown: &str, position: f64) -> Doc {
    Doc::new()
        .with("markdown", markdown)
        .with("position", position)
}

/// The markdown of each block, in view order
pub fn markdowns(blocks: &[Block]) -> Vec<&str> {
    blocks.iter().filter_map(Block::markdown).collect()
}

/// The keys of each block, in view order
pub fn keys(blocks: &[Block]) -> Vec<BlockKey> {
    blocks.iter().map(|b| b.key().clone()).collect()
}

/// Assert that positions are strictly increasing
pub fn assert_strictly_ordered(blocks: &[Block]) {
    for pair in blocks.windows(2) {
        assert!(
            pair[0].position() < pair[1].position(),
            "{} at {} is not before {} at {}",
            pair[0].key(),
            pair[0].position(),
            pair[1].key(),
            pair[1].position()
        );
    }
}
