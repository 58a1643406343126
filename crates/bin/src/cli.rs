//! CLI argument definitions for the dotted binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dot-notation queries and edits over JSON documents
#[derive(Parser, Debug)]
#[command(name = "dotted")]
#[command(about = "Dotted: dot-notation access, filtering and sorting for JSON documents")]
#[command(version)]
pub struct Cli {
    /// JSON document to read (stdin when omitted)
    #[arg(short, long, global = true, env = "DOTTED_INPUT")]
    pub input: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true, env = "DOTTED_PRETTY")]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flatten the document into a single-level map keyed by dotted paths
    Dot(DotArgs),
    /// Rebuild a nested document from a dotted map
    Undot,
    /// Print the value at a path
    Get(GetArgs),
    /// Check whether a path holds a non-null value
    Has(PathArgs),
    /// Set the value at a path and print the document
    Set(SetArgs),
    /// Remove paths and print the document
    Forget(ForgetArgs),
    /// Keep only the given top-level keys
    Only(KeysArgs),
    /// Drop the given top-level keys
    Except(KeysArgs),
    /// List the given keys that are absent
    Missing(KeysArgs),
    /// Extract a path from every element
    Pluck(PluckArgs),
    /// Sort the elements by a column
    Sort(SortArgs),
    /// Encode the document as a URL query string
    Query,
    /// Pick random elements
    Sample(SampleArgs),
}

/// Arguments for the dot command
#[derive(clap::Args, Debug)]
pub struct DotArgs {
    /// Prefix prepended to every flattened key
    #[arg(long, default_value = "")]
    pub prefix: String,
}

/// Arguments for commands that take a single path
#[derive(clap::Args, Debug)]
pub struct PathArgs {
    /// Dotted path, e.g. `user.address.city`
    pub path: String,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dotted path, e.g. `user.address.city`
    pub path: String,

    /// JSON value printed when the path does not resolve
    #[arg(short, long)]
    pub default: Option<String>,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Dotted path to write
    pub path: String,

    /// Value to store, as JSON. Text that is not valid JSON is stored as a string
    pub value: String,
}

/// Arguments for the forget command
#[derive(clap::Args, Debug)]
pub struct ForgetArgs {
    /// Dotted paths to remove
    #[arg(required = true)]
    pub paths: Vec<String>,
}

/// Arguments for the key filter commands
#[derive(clap::Args, Debug)]
pub struct KeysArgs {
    /// Top-level keys
    #[arg(required = true)]
    pub keys: Vec<String>,
}

/// Arguments for the pluck command
#[derive(clap::Args, Debug)]
pub struct PluckArgs {
    /// Path of the value to extract from each element
    pub value_path: String,

    /// Path of the value to key the results by
    #[arg(short, long)]
    pub key_path: Option<String>,
}

/// Arguments for the sort command
#[derive(clap::Args, Debug)]
pub struct SortArgs {
    /// Column to sort by. A flat key, or a dotted path with --lexical
    pub key: String,

    /// Sort in descending order
    #[arg(short, long)]
    pub descending: bool,

    /// Compare the string forms of the values at a dotted path
    #[arg(short, long)]
    pub lexical: bool,
}

/// Arguments for the sample command
#[derive(clap::Args, Debug)]
pub struct SampleArgs {
    /// Number of elements to pick
    pub count: usize,

    /// Seed for a reproducible sample
    #[arg(short, long)]
    pub seed: Option<u64>,
}
