//! The unflatten direction: flat entries back to a nested tree.

use indexmap::IndexMap;

use crate::{
    codec::{CodecError, FlatMap, UnflattenOptions, encoding, segment::Segment},
    node::Node,
};

/// Rebuilds a nested [`Node`] tree from path-keyed scalar entries.
///
/// Entries whose key does not start with `path_prefix` are excluded entirely;
/// matching keys have the prefix and any leading separators trimmed before
/// reconstruction. The root container kind is inferred in an explicit
/// pre-pass: the root is a sequence iff every first segment is an index
/// marker, a mapping otherwise. Zero matching entries yield an empty mapping
/// by convention.
///
/// Reconstruction is path-guided insertion, creating intermediate containers
/// on demand. The kind of a newly created container is decided by looking
/// ahead at the next segment. Sequence indices may be sparse; gaps are filled
/// with [`Node::Null`] so the final length is the highest index plus one.
///
/// Two policies apply when entries disagree about structure:
///
/// - A scalar occupying a slot that a longer path needs as a container is
///   discarded and replaced by the container. Lossy last-write-wins, kept
///   deliberately simple; the old scalar is not preserved anywhere.
/// - A container addressed with the wrong segment kind (a mapping key inside
///   a sequence, or an index marker inside a mapping) is a
///   [`CodecError::StructuralConflict`]. The flat-key set is inconsistent and
///   the whole call fails; no partial tree is returned.
///
/// Keys with empty segments (doubled separators) or unparseable index markers
/// fail with [`CodecError::MalformedPath`] rather than being silently
/// skipped. Assigning the same resolved path twice overwrites (the entry
/// processed last wins); callers must not rely on that ordering.
pub fn unflatten(entries: &FlatMap, options: &UnflattenOptions) -> Result<Node, CodecError> {
    // Pre-pass: filter by prefix, trim, split, and classify every key before
    // any construction begins. Root inference needs the full set up front.
    let mut parsed: Vec<(Vec<Segment>, &Node)> = Vec::new();
    for (raw_key, value) in entries {
        let Some(trimmed) = raw_key.strip_prefix(&options.path_prefix) else {
            continue;
        };
        parsed.push((split_key(raw_key, trimmed, &options.separator)?, value));
    }

    if parsed.is_empty() {
        return Ok(Node::Map(IndexMap::new()));
    }

    let root_is_list = parsed.iter().all(|(segments, _)| segments[0].is_index());
    let mut root = if root_is_list {
        Node::List(Vec::new())
    } else {
        Node::Map(IndexMap::new())
    };

    for (segments, value) in &parsed {
        let assigned = if options.decode_values {
            encoding::decode_value(value)
        } else {
            (*value).clone()
        };
        insert_at(&mut root, segments, 0, assigned, &options.separator)?;
    }

    tracing::debug!(
        entries = parsed.len(),
        root = root.type_name(),
        "reconstructed tree"
    );
    Ok(root)
}

/// Splits a trimmed key into classified segments, rejecting keys that do not
/// survive the split intact.
fn split_key(raw_key: &str, trimmed: &str, separator: &str) -> Result<Vec<Segment>, CodecError> {
    let mut path = trimmed;
    while let Some(rest) = path.strip_prefix(separator) {
        path = rest;
    }
    if path.is_empty() {
        return Err(CodecError::MalformedPath {
            key: raw_key.to_string(),
            reason: "no segments remain after prefix trimming".to_string(),
        });
    }

    let mut segments = Vec::new();
    for part in path.split(separator) {
        if part.is_empty() {
            return Err(CodecError::MalformedPath {
                key: raw_key.to_string(),
                reason: "empty segment from doubled separator".to_string(),
            });
        }
        let segment = Segment::parse(part).map_err(|err| CodecError::MalformedPath {
            key: raw_key.to_string(),
            reason: err.to_string(),
        })?;
        segments.push(segment);
    }
    Ok(segments)
}

/// Walks one segment of a path, creating or upgrading the container it
/// addresses, and assigns `value` at the final segment.
fn insert_at(
    container: &mut Node,
    segments: &[Segment],
    depth: usize,
    value: Node,
    separator: &str,
) -> Result<(), CodecError> {
    let segment = &segments[depth];
    let last = depth + 1 == segments.len();

    match (&mut *container, segment) {
        (Node::Map(map), Segment::Key(name)) => {
            if last {
                map.insert(name.clone(), value);
                return Ok(());
            }
            let child = map
                .entry(name.clone())
                .or_insert_with(|| empty_child(&segments[depth + 1]));
            if child.is_leaf() {
                // Lossy upgrade: a shorter conflicting path left a scalar here,
                // and the container replaces it outright.
                *child = empty_child(&segments[depth + 1]);
            }
            insert_at(child, segments, depth + 1, value, separator)
        }
        (Node::List(list), Segment::Index(index)) => {
            if list.len() <= *index {
                list.resize(*index + 1, Node::Null);
            }
            let slot = &mut list[*index];
            if last {
                *slot = value;
                return Ok(());
            }
            if slot.is_leaf() {
                *slot = empty_child(&segments[depth + 1]);
            }
            insert_at(slot, segments, depth + 1, value, separator)
        }
        (Node::Map(_), Segment::Index(_)) => Err(conflict(
            segments,
            depth,
            separator,
            format!("mapping container addressed with sequence index '{segment}'"),
        )),
        (Node::List(_), Segment::Key(_)) => Err(conflict(
            segments,
            depth,
            separator,
            format!("sequence container addressed with mapping key '{segment}'"),
        )),
        // Leaves are upgraded to containers before descent, so this only
        // triggers if the invariant is ever broken upstream.
        _ => Err(conflict(
            segments,
            depth,
            separator,
            "scalar found where a container was required".to_string(),
        )),
    }
}

/// Empty container whose kind is chosen by lookahead at the next segment.
fn empty_child(next: &Segment) -> Node {
    if next.is_index() {
        Node::List(Vec::new())
    } else {
        Node::Map(IndexMap::new())
    }
}

fn conflict(segments: &[Segment], depth: usize, separator: &str, reason: String) -> CodecError {
    let path = segments[..=depth]
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator);
    CodecError::StructuralConflict { path, reason }
}
