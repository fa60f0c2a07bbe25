//! The structural flatten/unflatten codec.
//!
//! This module converts between nested [`Node`](crate::Node) trees and flat
//! collections of `(path key, scalar)` entries, the only shape a flat
//! parameter store can hold. The two directions are exact inverses connected
//! solely through the flat-key textual format:
//!
//! - [`flatten`] walks a tree top-down and emits one entry per leaf.
//! - [`unflatten`] consumes an unordered entry collection and rebuilds the
//!   tree bottom-up via incremental path-guided insertion.
//! - [`encoding`] is the shared leaf helper deciding whether a scalar needs
//!   reversible percent-encoding on the way out, or decoding on the way back.
//!
//! # Path keys
//!
//! A path key is a separator-joined segment list. Mapping entries are
//! addressed by their key, sequence elements by a wrapped index marker
//! (`_0_`, `_12_`, ...) that is distinguishable from an all-digit mapping
//! key. See [`segment`] for the classification rules.
//!
//! # Usage
//!
//! ```
//! use flatkv::{Node, FlattenOptions, UnflattenOptions, flatten, unflatten};
//!
//! let mut tree = indexmap::IndexMap::new();
//! tree.insert("region".to_string(), Node::from("eu-west-1"));
//! tree.insert(
//!     "zones".to_string(),
//!     Node::List(vec![Node::from("a"), Node::from("b")]),
//! );
//! let tree = Node::Map(tree);
//!
//! let flat = flatten(&tree, &FlattenOptions::default());
//! assert_eq!(flat.get("zones/_1_"), Some(&Node::from("b")));
//!
//! let rebuilt = unflatten(&flat, &UnflattenOptions::default()).unwrap();
//! assert_eq!(rebuilt, tree);
//! ```

use indexmap::IndexMap;

use crate::node::Node;

pub mod encoding;
mod errors;
mod flatten;
pub mod segment;
mod unflatten;

pub use errors::CodecError;
pub use flatten::flatten;
pub use segment::Segment;
pub use unflatten::unflatten;

/// The flat collection: path keys mapped to scalar nodes.
///
/// Insertion order is the flattener's traversal order, kept stable for
/// deterministic snapshots. The unflattener accepts entries in any order.
pub type FlatMap = IndexMap<String, Node>;

/// Configuration for [`flatten`].
#[derive(Debug, Clone)]
pub struct FlattenOptions {
    /// Separator joining path segments.
    pub separator: String,
    /// Prefix prepended to every emitted key (e.g. `/platform`). Empty means
    /// keys start at the root.
    pub root_prefix: String,
    /// Percent-encode scalar values containing unsafe characters. Enabling
    /// this stringifies every emitted value.
    pub encode_values: bool,
    /// Characters exempt from percent-encoding when `encode_values` is set.
    pub safe_chars: String,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            separator: "/".to_string(),
            root_prefix: String::new(),
            encode_values: false,
            safe_chars: String::new(),
        }
    }
}

/// Configuration for [`unflatten`].
#[derive(Debug, Clone)]
pub struct UnflattenOptions {
    /// Separator splitting path segments.
    pub separator: String,
    /// Only entries whose key starts with this prefix participate; the prefix
    /// is trimmed before reconstruction. Empty means no filtering.
    pub path_prefix: String,
    /// Percent-decode text values that look encoded. Best-effort: values that
    /// fail to decode are kept unchanged.
    pub decode_values: bool,
}

impl Default for UnflattenOptions {
    fn default() -> Self {
        Self {
            separator: "/".to_string(),
            path_prefix: String::new(),
            decode_values: false,
        }
    }
}
