//! Block kinds and their text capability.

use std::fmt;

use crate::constants::{MARKDOWN, TEXT};

/// The type tag of a block.
///
/// The well-known kinds have dedicated variants; anything else registered by
/// an extension is carried verbatim in [`BlockType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockType {
    Paragraph,
    Header,
    ListItem,
    Image,
    Spacer,
    Prompt,
    Embed,
    Other(String),
}

/// What kind of text a block carries, which decides how its data merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Inline markdown in the `markdown` field
    Markdown,
    /// Raw text in the `text` field
    PlainText,
    /// No mergeable text (images, embeds, unknown kinds)
    Void,
}

impl Capability {
    /// The payload field holding the block's text, if any
    pub fn text_field(self) -> Option<&'static str> {
        match self {
            Capability::Markdown => Some(MARKDOWN),
            Capability::PlainText => Some(TEXT),
            Capability::Void => None,
        }
    }

    pub fn is_textual(self) -> bool {
        !matches!(self, Capability::Void)
    }
}

impl BlockType {
    /// The wire name used in identity keys
    pub fn as_str(&self) -> &str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Header => "header",
            BlockType::ListItem => "list-item",
            BlockType::Image => "image",
            BlockType::Spacer => "spacer",
            BlockType::Prompt => "prompt",
            BlockType::Embed => "embed",
            BlockType::Other(name) => name.as_str(),
        }
    }

    pub fn capability(&self) -> Capability {
        match self {
            BlockType::Paragraph | BlockType::ListItem => Capability::Markdown,
            BlockType::Header | BlockType::Spacer | BlockType::Prompt => Capability::PlainText,
            BlockType::Image | BlockType::Embed | BlockType::Other(_) => Capability::Void,
        }
    }
}

impl From<&str> for BlockType {
    fn from(name: &str) -> Self {
        match name {
            "paragraph" => BlockType::Paragraph,
            "header" => BlockType::Header,
            "list-item" => BlockType::ListItem,
            "image" => BlockType::Image,
            "spacer" => BlockType::Spacer,
            "prompt" => BlockType::Prompt,
            "embed" => BlockType::Embed,
            other => BlockType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
