//! Error types for the block model.

use thiserror::Error;

/// Errors raised when reading blocks out of partial documents.
///
/// Reducers never surface these; they skip the offending entry and log it.
/// They reach callers only through explicit parsing such as
/// [`BlockKey::parse`](super::BlockKey::parse).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BlockError {
    /// An identity key was not of the form `"{blockType}:{blockId}"`
    #[error("Invalid block key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// A block payload was not a map
    #[error("Block '{key}' has a {actual} payload, expected a map")]
    InvalidPayload { key: String, actual: String },
}

impl BlockError {
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, BlockError::InvalidKey { .. })
    }

    pub fn is_invalid_payload(&self) -> bool {
        matches!(self, BlockError::InvalidPayload { .. })
    }
}

impl From<BlockError> for crate::Error {
    fn from(err: BlockError) -> Self {
        crate::Error::Block(err)
    }
}
