//! Query string command.

use dotted::{Value, query};

/// Run the query command. Prints the raw query string.
pub fn run(document: &Value) -> dotted::Result<()> {
    println!("{}", query::query(document)?);
    Ok(())
}
