//! Unflatten command - flat path-keyed entries in, nested JSON out.

use flatkv::{FlatMap, Node, UnflattenOptions, unflatten};

use crate::{
    cli::UnflattenArgs,
    commands::{print_json, read_input},
};

/// Run the unflatten command
pub fn run(args: &UnflattenArgs) -> flatkv::Result<()> {
    let text = read_input(args.input.as_ref())?;
    let document = serde_json::from_str::<serde_json::Value>(&text)?;

    let serde_json::Value::Object(entries) = document else {
        return Err(flatkv::Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "flat input must be a JSON object of path keys to scalar values",
        )));
    };
    let flat: FlatMap = entries
        .into_iter()
        .map(|(key, value)| (key, Node::from(value)))
        .collect();

    let options = UnflattenOptions {
        separator: args.separator.clone(),
        path_prefix: args.prefix.clone(),
        decode_values: args.decode,
    };
    let tree = unflatten(&flat, &options)?;
    tracing::info!(root = tree.type_name(), "unflatten complete");

    print_json(&serde_json::Value::from(tree), args.pretty)
}
