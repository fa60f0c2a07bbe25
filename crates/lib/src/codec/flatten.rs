//! The flatten direction: nested tree to flat entries.

use crate::{
    codec::{FlatMap, FlattenOptions, encoding, segment::Segment},
    node::Node,
};

/// Flattens a nested [`Node`] tree into path-keyed scalar entries.
///
/// Walks the tree top-down. Each mapping key extends the path with
/// `separator + key`, each sequence element with `separator + _idx_`, and
/// each scalar terminates a path and emits one entry. The first segment of a
/// path is appended without a separator, so an empty `root_prefix` yields
/// keys like `users/_0_/name` rather than `/users/_0_/name`.
///
/// Entry order is the traversal order (mapping insertion order, sequence
/// element order) and is stable, though [`unflatten`](crate::unflatten)
/// accepts entries in any order.
///
/// Flattening cannot fail; any well-formed tree produces a (possibly empty)
/// flat collection. Two limitations are inherent to the format:
///
/// - An empty mapping or sequence emits no entries at all, so empty
///   containers do not survive a round trip.
/// - Mapping keys in index-marker form (`_3_`) or containing the separator
///   are reserved; they would reconstruct as different structure.
pub fn flatten(node: &Node, options: &FlattenOptions) -> FlatMap {
    let mut entries = FlatMap::new();
    flatten_into(node, options.root_prefix.clone(), options, &mut entries);
    tracing::debug!(
        entries = entries.len(),
        encoded = options.encode_values,
        "flattened tree"
    );
    entries
}

fn flatten_into(node: &Node, parent_key: String, options: &FlattenOptions, out: &mut FlatMap) {
    match node {
        Node::Map(map) => {
            for (key, child) in map {
                flatten_into(child, join(&parent_key, key, &options.separator), options, out);
            }
        }
        Node::List(list) => {
            for (index, child) in list.iter().enumerate() {
                let marker = Segment::Index(index).to_string();
                flatten_into(child, join(&parent_key, &marker, &options.separator), options, out);
            }
        }
        scalar => {
            let value = if options.encode_values {
                encoding::encode_value(scalar, &options.safe_chars)
            } else {
                scalar.clone()
            };
            out.insert(parent_key, value);
        }
    }
}

fn join(parent: &str, segment: &str, separator: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{parent}{separator}{segment}")
    }
}
