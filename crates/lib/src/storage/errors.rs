//! Error types for the persistence adapters.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or persisting snapshots.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StorageError {
    /// No snapshot is stored under this document id.
    #[error("Document not found: {document_id}")]
    DocumentNotFound {
        /// The requested document id
        document_id: String,
    },

    /// The document id cannot be mapped to a storage location.
    #[error("Invalid document id '{document_id}'")]
    InvalidDocumentId {
        /// The rejected document id
        document_id: String,
    },

    /// A stored snapshot could not be decoded.
    #[error("Corrupt snapshot for document {document_id}: {reason}")]
    CorruptSnapshot {
        /// The document whose snapshot is corrupt
        document_id: String,
        /// What went wrong while decoding
        reason: String,
    },

    /// Serialization failed.
    #[error("Serialization failed")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// File I/O error.
    #[error("File I/O error on {}", path.display())]
    FileIo {
        /// The file being read or written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The background write queue has shut down.
    #[error("Write queue is closed")]
    QueueClosed,
}

impl StorageError {
    /// Check if this error indicates a missing document.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::DocumentNotFound { .. })
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, StorageError::FileIo { .. })
    }

    /// Check if this error is related to (de)serialization.
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            StorageError::SerializationFailed { .. } | StorageError::CorruptSnapshot { .. }
        )
    }
}

impl From<StorageError> for crate::Error {
    fn from(err: StorageError) -> Self {
        crate::Error::Storage(err)
    }
}
