//! Subcommand implementations. Each command takes the parsed input document
//! and prints its result.

pub mod filter;
pub mod path;
pub mod query;
pub mod sample;
pub mod sort;
