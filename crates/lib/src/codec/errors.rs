//! Error types for codec operations.
//!
//! Structural and path errors abort the whole unflatten call. A partially
//! reconstructed tree is worse than an explicit failure: callers could not
//! distinguish "missing because absent" from "missing because of a mid-build
//! failure", so no partial output is ever returned alongside these errors.

use thiserror::Error;

/// Structured error types for codec operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A flat key implies a container kind incompatible with what that path
    /// already resolved to (the same location required as both a sequence and
    /// a mapping).
    #[error("structural conflict at '{path}': {reason}")]
    StructuralConflict { path: String, reason: String },

    /// A path key could not be split into usable segments: empty segments
    /// from doubled separators, an index marker too large to represent, or a
    /// key that trims down to nothing.
    #[error("malformed path key '{key}': {reason}")]
    MalformedPath { key: String, reason: String },
}

impl CodecError {
    /// Check if this error is a structural conflict between flat keys
    pub fn is_structural_conflict(&self) -> bool {
        matches!(self, CodecError::StructuralConflict { .. })
    }

    /// Check if this error reports a malformed path key
    pub fn is_malformed_path(&self) -> bool {
        matches!(self, CodecError::MalformedPath { .. })
    }

    /// Get the resolved path if this is a conflict error
    pub fn path(&self) -> Option<&str> {
        match self {
            CodecError::StructuralConflict { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get the raw key if this is a path error
    pub fn key(&self) -> Option<&str> {
        match self {
            CodecError::MalformedPath { key, .. } => Some(key),
            _ => None,
        }
    }
}

// Conversion from CodecError to the main Error type
impl From<CodecError> for crate::Error {
    fn from(err: CodecError) -> Self {
        crate::Error::Codec(err)
    }
}
