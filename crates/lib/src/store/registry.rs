//! Grouping the ordered view for rendering.

use crate::block::{Block, BlockType};

/// One entry of a grouped view.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry<'a> {
    /// A block rendered on its own
    Block(&'a Block),
    /// A run of consecutive list items sharing the same `ordered` flag
    List(ListGroup<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListGroup<'a> {
    /// `group-` followed by the key of the first item
    pub key: String,
    pub ordered: bool,
    pub items: Vec<&'a Block>,
}

impl Entry<'_> {
    /// The blocks of this entry, in order
    pub fn blocks(&self) -> Vec<&Block> {
        match self {
            Entry::Block(block) => vec![*block],
            Entry::List(group) => group.items.clone(),
        }
    }
}

/// Groups consecutive list items of an ordered view.
///
/// A list item joins the previous entry when that entry is a list with the
/// same `ordered` flag; otherwise it opens a new list. Every other block is
/// an entry of its own.
pub fn group_blocks(view: &[Block]) -> Vec<Entry<'_>> {
    let mut entries: Vec<Entry<'_>> = Vec::new();
    for block in view {
        if block.block_type() != &BlockType::ListItem {
            entries.push(Entry::Block(block));
            continue;
        }
        if let Some(Entry::List(group)) = entries.last_mut()
            && group.ordered == block.ordered()
        {
            group.items.push(block);
            continue;
        }
        entries.push(Entry::List(ListGroup {
            key: format!("group-{}", block.key()),
            ordered: block.ordered(),
            items: vec![block],
        }));
    }
    entries
}
