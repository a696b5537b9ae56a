//! Error types for partial-document operations.
//!
//! Merging is total and never fails; these errors only come out of typed
//! access (`TryFrom<&Value>`) and JSON decoding at the wire boundary.

use thiserror::Error;

/// Structured error types for partial-document operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CRDTError {
    /// Type mismatch while reading a value
    #[error("CRDT type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// The wire form could not be decoded into a partial document
    #[error("CRDT deserialization failed: {reason}")]
    DeserializationFailed { reason: String },

    /// The top level of a partial document was not a JSON object
    #[error("Expected a JSON object at the top level, found {actual}")]
    NotAnObject { actual: String },
}

impl CRDTError {
    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            CRDTError::TypeMismatch { .. } | CRDTError::NotAnObject { .. }
        )
    }

    /// Check if this error is related to serialization
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, CRDTError::DeserializationFailed { .. })
    }
}

// Conversion from CRDTError to the main Error type
impl From<CRDTError> for crate::Error {
    fn from(err: CRDTError) -> Self {
        crate::Error::CRDT(err)
    }
}
