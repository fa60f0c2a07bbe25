//! Flatten command - nested JSON in, flat path-keyed entries out.

use flatkv::{FlattenOptions, Node, flatten};

use crate::{
    cli::FlattenArgs,
    commands::{print_json, read_input},
};

/// Run the flatten command
pub fn run(args: &FlattenArgs) -> flatkv::Result<()> {
    let text = read_input(args.input.as_ref())?;
    let tree = Node::from(serde_json::from_str::<serde_json::Value>(&text)?);

    let options = FlattenOptions {
        separator: args.separator.clone(),
        root_prefix: args.prefix.clone(),
        encode_values: args.encode,
        safe_chars: args.safe_chars.clone(),
    };
    let flat = flatten(&tree, &options);
    tracing::info!(entries = flat.len(), "flatten complete");

    let output: serde_json::Value = flat
        .into_iter()
        .map(|(key, value)| (key, serde_json::Value::from(value)))
        .collect::<serde_json::Map<String, serde_json::Value>>()
        .into();
    print_json(&output, args.pretty)
}
