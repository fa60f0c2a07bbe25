//! Command implementations for the flatkv binary.

use std::{
    io::Read,
    path::{Path, PathBuf},
};

pub mod flatten;
pub mod unflatten;

/// Reads the input document from a file, or from stdin when the path is
/// absent or `-`.
pub fn read_input(input: Option<&PathBuf>) -> flatkv::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Writes a JSON value to stdout, pretty-printed on request.
pub fn print_json(value: &serde_json::Value, pretty: bool) -> flatkv::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
