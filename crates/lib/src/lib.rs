//!
//! Folio: a block-structured rich-text document engine.
//! This library provides the core components for building editors on top of an append-only log of block changes.
//!
//! ## Core Concepts
//!
//! Folio is built around several key concepts:
//!
//! * **Partial documents (`crdt::Doc`)**: The one encoding for "a set of block changes": a map from `"{blockType}:{blockId}"` keys to payloads or `null` tombstones, folded by a single tombstone-aware deep merge.
//! * **Blocks (`block::Block`)**: Typed content units (paragraph, header, list item, image, spacer, prompt, embed) with an immutable identity and a numeric sort position.
//! * **Fragment log (`store::FragmentLog`)**: An append-only sequence of partial documents whose first slot holds the base snapshot.
//! * **Documents (`store::Document`)**: Own a fragment log and a shadow overlay, and fold both incrementally into a position-ordered view.
//! * **Shadow overlay (`store::ShadowOverlay`)**: One uncommitted partial document composited over committed state, flushed into the log or discarded atomically.
//! * **Markdown (`markdown`)**: A tokenizer, recursive-descent parser and emitters for the bold/italic/link inline language.
//! * **Editor (`editor::Editor`)**: The action layer translating edits into fragment pushes and overlay operations, bound to a persistence backend (`storage::SnapshotStore`).

pub mod block;
pub mod config;
pub mod constants;
pub mod crdt;
pub mod editor;
pub mod markdown;
pub mod position;
pub mod storage;
pub mod store;

pub use block::{Block, BlockKey, BlockType};
pub use editor::Editor;
pub use store::Document;

/// Result type used throughout the Folio library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Folio library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured partial-document errors from the crdt module
    #[error(transparent)]
    CRDT(crdt::CRDTError),

    /// Structured block model errors from the block module
    #[error(transparent)]
    Block(block::BlockError),

    /// Structured persistence errors from the storage module
    #[error(transparent)]
    Storage(storage::StorageError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::CRDT(_) => "crdt",
            Error::Block(_) => "block",
            Error::Storage(_) => "storage",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Storage(storage_err) => storage_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Storage(storage_err) => storage_err.is_io_error(),
            _ => false,
        }
    }

    /// Check if this error is related to (de)serialization.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Serialize(_) => true,
            Error::CRDT(crdt_err) => crdt_err.is_serialization_error(),
            Error::Storage(storage_err) => storage_err.is_serialization_error(),
            _ => false,
        }
    }
}
