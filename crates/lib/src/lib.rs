//!
//! flatkv: a structural codec between nested configuration trees and flat,
//! path-keyed parameter stores.
//!
//! ## Core Concepts
//!
//! Flat key-value backends (parameter stores, tag sets, environment blocks)
//! cannot represent nested structure natively. flatkv converts between the two
//! shapes:
//!
//! * **Nodes (`node::Node`)**: The universal in-memory value, a tagged union over
//!   scalars, ordered lists, and insertion-ordered maps.
//! * **Flattening (`codec::flatten`)**: Walks a `Node` tree top-down and emits one
//!   `(path key, scalar)` entry per leaf, e.g. `users/_0_/name`.
//! * **Unflattening (`codec::unflatten`)**: Rebuilds the tree from an unordered
//!   flat collection via path-guided insertion, inferring whether the root is a
//!   list or a map.
//! * **Value encoding (`codec::encoding`)**: Optional reversible percent-encoding
//!   for scalar text containing characters unsafe in flat keys or URLs.
//!
//! Both directions are pure, synchronous functions with no shared state; the flat
//! textual format is the only contract between them.

pub mod codec;
pub mod node;

pub use codec::{FlatMap, FlattenOptions, UnflattenOptions, flatten, unflatten};
pub use node::Node;

/// Result type used throughout the flatkv library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the flatkv library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured codec errors from the codec module
    #[error(transparent)]
    Codec(codec::CodecError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
            Error::Codec(_) => "codec",
        }
    }

    /// Check if this error is a structural conflict between flat keys.
    pub fn is_structural_conflict(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_structural_conflict(),
            _ => false,
        }
    }

    /// Check if this error reports a malformed path key.
    pub fn is_malformed_path(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_malformed_path(),
            _ => false,
        }
    }

    /// Check if this error came from parsing or serializing interchange JSON.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
