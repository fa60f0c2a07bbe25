//! Tests for the flatten direction.

use flatkv::{FlattenOptions, Node, flatten};
use serde_json::json;

fn node(value: serde_json::Value) -> Node {
    Node::from(value)
}

#[test]
fn test_flatten_nested_mapping() {
    let tree = node(json!({"a": {"b": {"c": 1}}, "d": true}));
    let flat = flatten(&tree, &FlattenOptions::default());

    assert_eq!(flat.len(), 2);
    assert_eq!(flat["a/b/c"], 1i64);
    assert_eq!(flat["d"], true);
}

#[test]
fn test_flatten_sequences_use_index_markers() {
    let tree = node(json!({"zones": ["a", "b", "c"]}));
    let flat = flatten(&tree, &FlattenOptions::default());

    let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zones/_0_", "zones/_1_", "zones/_2_"]);
}

#[test]
fn test_flatten_root_sequence_has_no_leading_separator() {
    let tree = node(json!(["x", "y"]));
    let flat = flatten(&tree, &FlattenOptions::default());

    let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["_0_", "_1_"]);
}

#[test]
fn test_flatten_root_scalar_lands_on_the_prefix() {
    let flat = flatten(
        &Node::from("solo"),
        &FlattenOptions {
            root_prefix: "/platform/value".to_string(),
            ..Default::default()
        },
    );
    assert_eq!(flat.len(), 1);
    assert_eq!(flat["/platform/value"], "solo");
}

#[test]
fn test_flatten_with_root_prefix() {
    let tree = node(json!({"region": "eu-west-1"}));
    let flat = flatten(
        &tree,
        &FlattenOptions {
            root_prefix: "/platform".to_string(),
            ..Default::default()
        },
    );
    assert_eq!(flat["/platform/region"], "eu-west-1");
}

#[test]
fn test_flatten_with_custom_separator() {
    let tree = node(json!({"a": {"b": [1]}}));
    let flat = flatten(
        &tree,
        &FlattenOptions {
            separator: "::".to_string(),
            ..Default::default()
        },
    );
    assert_eq!(flat["a::b::_0_"], 1i64);
}

#[test]
fn test_flatten_empty_containers_emit_nothing() {
    let tree = node(json!({"empty_map": {}, "empty_list": [], "kept": 1}));
    let flat = flatten(&tree, &FlattenOptions::default());

    assert_eq!(flat.len(), 1);
    assert_eq!(flat["kept"], 1i64);
}

#[test]
fn test_flatten_order_follows_traversal() {
    let tree = node(json!({"b": 1, "a": {"z": 2, "y": 3}, "c": [4, 5]}));
    let flat = flatten(&tree, &FlattenOptions::default());

    let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["b", "a/z", "a/y", "c/_0_", "c/_1_"]);
}

#[test]
fn test_flatten_encodes_unsafe_values_when_enabled() {
    let tree = node(json!({"users": [{"name": "Ann Lee"}, {"name": "Bo"}]}));
    let flat = flatten(
        &tree,
        &FlattenOptions {
            encode_values: true,
            ..Default::default()
        },
    );

    assert_eq!(flat["users/_0_/name"], "Ann%20Lee");
    assert_eq!(flat["users/_1_/name"], "Bo");
}

#[test]
fn test_flatten_encoding_stringifies_every_value() {
    let tree = node(json!({"count": 3, "on": false}));
    let flat = flatten(
        &tree,
        &FlattenOptions {
            encode_values: true,
            ..Default::default()
        },
    );

    assert_eq!(flat["count"], "3");
    assert_eq!(flat["on"], "false");
}

#[test]
fn test_flatten_without_encoding_keeps_scalar_types() {
    let tree = node(json!({"count": 3, "note": "a b"}));
    let flat = flatten(&tree, &FlattenOptions::default());

    assert_eq!(flat["count"], 3i64);
    assert_eq!(flat["note"], "a b");
}

#[test]
fn test_flatten_respects_safe_chars() {
    let tree = node(json!({"url": "a/b c"}));
    let flat = flatten(
        &tree,
        &FlattenOptions {
            encode_values: true,
            safe_chars: "/".to_string(),
            ..Default::default()
        },
    );
    assert_eq!(flat["url"], "a/b%20c");
}
