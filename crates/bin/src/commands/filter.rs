//! Filter commands - only, except, missing, pluck.

use dotted::{Value, filter};

use crate::cli::{KeysArgs, PluckArgs};
use crate::output::{OutputFormat, print_value};

/// Run the only command
pub fn only(document: &Value, args: &KeysArgs, format: OutputFormat) -> dotted::Result<()> {
    print_value(&filter::only(document, &args.keys)?, format)
}

/// Run the except command
pub fn except(document: &Value, args: &KeysArgs, format: OutputFormat) -> dotted::Result<()> {
    print_value(&filter::except(document, &args.keys)?, format)
}

/// Run the missing command
pub fn missing(document: &Value, args: &KeysArgs, format: OutputFormat) -> dotted::Result<()> {
    let absent = filter::missing(document, &args.keys)?;
    let absent = Value::List(absent.into_iter().map(Value::from).collect());
    print_value(&absent, format)
}

/// Run the pluck command
pub fn pluck(document: &Value, args: &PluckArgs, format: OutputFormat) -> dotted::Result<()> {
    let plucked = filter::pluck(document, &args.value_path, args.key_path.as_deref())?;
    print_value(&plucked, format)
}
