//! Block identity keys.

use std::{fmt, str::FromStr};

use super::{BlockError, BlockType};
use crate::constants::KEY_SEPARATOR;

/// The immutable identity of a block: its type and its id.
///
/// Encoded as `"{blockType}:{blockId}"`. Parsing splits on the first `:`, so
/// ids may themselves contain colons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockKey {
    pub block_type: BlockType,
    pub block_id: String,
}

impl BlockKey {
    pub fn new(block_type: BlockType, block_id: impl Into<String>) -> Self {
        Self {
            block_type,
            block_id: block_id.into(),
        }
    }

    /// Parses an identity key.
    ///
    /// ```
    /// # use folio::block::{BlockKey, BlockType};
    /// let key = BlockKey::parse("list-item:42").unwrap();
    /// assert_eq!(key.block_type, BlockType::ListItem);
    /// assert_eq!(key.block_id, "42");
    /// assert!(BlockKey::parse("no-separator").is_err());
    /// ```
    pub fn parse(key: &str) -> Result<BlockKey, BlockError> {
        let invalid = |reason: &str| BlockError::InvalidKey {
            key: key.to_string(),
            reason: reason.to_string(),
        };
        let (block_type, block_id) = key
            .split_once(KEY_SEPARATOR)
            .ok_or_else(|| invalid("missing separator"))?;
        if block_type.is_empty() {
            return Err(invalid("empty block type"));
        }
        if block_id.is_empty() {
            return Err(invalid("empty block id"));
        }
        Ok(BlockKey::new(BlockType::from(block_type), block_id))
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{KEY_SEPARATOR}{}", self.block_type, self.block_id)
    }
}

impl FromStr for BlockKey {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKey::parse(s)
    }
}

impl From<&BlockKey> for String {
    fn from(key: &BlockKey) -> Self {
        key.to_string()
    }
}
