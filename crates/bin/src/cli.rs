//! CLI argument definitions for the flatkv binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// flatkv structural codec
#[derive(Parser, Debug)]
#[command(name = "flatkv")]
#[command(about = "Convert nested JSON configuration to flat path-keyed entries and back")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flatten a nested JSON document into flat path-keyed entries
    Flatten(FlattenArgs),
    /// Rebuild a nested JSON document from flat path-keyed entries
    Unflatten(UnflattenArgs),
}

/// Arguments for the flatten command
#[derive(clap::Args, Debug)]
pub struct FlattenArgs {
    /// Input JSON file; `-` or absent reads stdin
    pub input: Option<PathBuf>,

    /// Separator joining path segments
    #[arg(short, long, default_value = "/", env = "FLATKV_SEPARATOR")]
    pub separator: String,

    /// Prefix prepended to every emitted key (e.g. /platform)
    #[arg(short, long, default_value = "", env = "FLATKV_PREFIX")]
    pub prefix: String,

    /// Percent-encode values containing unsafe characters
    #[arg(short, long)]
    pub encode: bool,

    /// Characters exempt from percent-encoding
    #[arg(long, default_value = "", requires = "encode")]
    pub safe_chars: String,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the unflatten command
#[derive(clap::Args, Debug)]
pub struct UnflattenArgs {
    /// Input JSON file (a flat object); `-` or absent reads stdin
    pub input: Option<PathBuf>,

    /// Separator splitting path segments
    #[arg(short, long, default_value = "/", env = "FLATKV_SEPARATOR")]
    pub separator: String,

    /// Only keys starting with this prefix participate; the prefix is trimmed
    #[arg(short, long, default_value = "", env = "FLATKV_PREFIX")]
    pub prefix: String,

    /// Percent-decode values that look encoded
    #[arg(short, long)]
    pub decode: bool,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,
}
