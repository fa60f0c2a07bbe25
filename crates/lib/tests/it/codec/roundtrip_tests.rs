//! Round-trip properties across both codec directions.

use flatkv::{FlattenOptions, Node, UnflattenOptions, flatten, unflatten};
use flatkv::codec::encoding;
use serde_json::json;

fn round_trip(tree: &Node) -> Node {
    let flat = flatten(tree, &FlattenOptions::default());
    unflatten(&flat, &UnflattenOptions::default()).unwrap()
}

#[test]
fn test_round_trip_law() {
    // Holds for any tree with no empty containers and no keys in marker form.
    let tree = Node::from(json!({
        "name": "platform",
        "replicas": 3,
        "ratio": 0.25,
        "enabled": true,
        "owner": null,
        "zones": ["a", "b"],
        "nodes": [
            {"host": "n1", "ports": [80, 443]},
            {"host": "n2", "ports": [22]}
        ]
    }));
    assert_eq!(round_trip(&tree), tree);
}

#[test]
fn test_round_trip_scalars_keep_their_types() {
    let tree = Node::from(json!({"i": 7, "b": false, "n": null, "f": 2.5, "s": "x"}));
    assert_eq!(round_trip(&tree), tree);
}

#[test]
fn test_round_trip_with_prefix() {
    let tree = Node::from(json!({"a": {"b": 1}}));
    let flat = flatten(
        &tree,
        &FlattenOptions {
            root_prefix: "/platform".to_string(),
            ..Default::default()
        },
    );
    let rebuilt = unflatten(
        &flat,
        &UnflattenOptions {
            path_prefix: "/platform".to_string(),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(rebuilt, tree);
}

#[test]
fn test_round_trip_with_custom_separator() {
    let tree = Node::from(json!({"a": {"b": ["x"]}}));
    let flat = flatten(
        &tree,
        &FlattenOptions {
            separator: "|".to_string(),
            ..Default::default()
        },
    );
    let rebuilt = unflatten(
        &flat,
        &UnflattenOptions {
            separator: "|".to_string(),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(rebuilt, tree);
}

#[test]
fn test_encode_decode_scenario() {
    // Text-only tree: encoding and decoding enabled on both ends reproduces
    // the original exactly.
    let tree = Node::from(json!({"users": [{"name": "Ann Lee"}, {"name": "Bo"}]}));
    let flat = flatten(
        &tree,
        &FlattenOptions {
            encode_values: true,
            ..Default::default()
        },
    );
    assert_eq!(flat["users/_0_/name"], "Ann%20Lee");
    assert_eq!(flat["users/_1_/name"], "Bo");

    let rebuilt = unflatten(
        &flat,
        &UnflattenOptions {
            decode_values: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(rebuilt, tree);
}

#[test]
fn test_decode_is_a_one_shot_heuristic() {
    // Decoding a non-percent-looking string is a no-op, so re-decoding it is
    // safe in that narrow case only.
    let decoded = encoding::decode_text("100% organic");
    assert_eq!(decoded, "100% organic");
    assert_eq!(encoding::decode_text(&decoded), decoded);

    // Double-encoded text demonstrates why decode must not be repeated:
    // the second pass keeps unwrapping.
    let once = encoding::decode_text("a%2520b");
    assert_eq!(once, "a%20b");
    assert_eq!(encoding::decode_text(&once), "a b");
}

#[test]
fn test_empty_containers_do_not_survive() {
    // Known limitation: the flat form cannot say "this path is an empty
    // container", so empty containers vanish on the way through.
    let tree = Node::from(json!({"kept": 1, "lost": {}}));
    assert_eq!(round_trip(&tree), Node::from(json!({"kept": 1})));
}

#[test]
fn test_deeply_nested_round_trip() {
    let tree = Node::from(json!(
        {"a": [{"b": [{"c": [{"d": "leaf"}]}]}]}
    ));
    assert_eq!(round_trip(&tree), tree);
}
