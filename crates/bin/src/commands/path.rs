//! Path commands - dot, undot, get, has, set, forget.

use dotted::{Map, Value, path};

use crate::cli::{DotArgs, ForgetArgs, GetArgs, PathArgs, SetArgs};
use crate::input::{parse_json, parse_json_or_text};
use crate::output::{OutputFormat, print_value};

/// Run the dot command
pub fn dot(document: &Value, args: &DotArgs, format: OutputFormat) -> dotted::Result<()> {
    let flat = path::dot(document, &args.prefix);
    print_value(&Value::Map(flat), format)
}

/// Run the undot command
pub fn undot(document: Value, format: OutputFormat) -> dotted::Result<()> {
    // Any container works as a dotted map
    document.require_container("undot")?;
    let flat: Map = document.into_entries().into_iter().collect();
    print_value(&path::undot(&flat), format)
}

/// Run the get command
pub fn get(document: &Value, args: &GetArgs, format: OutputFormat) -> dotted::Result<()> {
    let default = match &args.default {
        Some(text) => parse_json(text)?,
        None => Value::Null,
    };
    print_value(&path::get_or(document, &args.path, default), format)
}

/// Run the has command
pub fn has(document: &Value, args: &PathArgs) -> dotted::Result<()> {
    println!("{}", path::has(document, &args.path));
    Ok(())
}

/// Run the set command
pub fn set(mut document: Value, args: &SetArgs, format: OutputFormat) -> dotted::Result<()> {
    path::set(&mut document, &args.path, parse_json_or_text(&args.value))?;
    print_value(&document, format)
}

/// Run the forget command
pub fn forget(mut document: Value, args: &ForgetArgs, format: OutputFormat) -> dotted::Result<()> {
    path::forget(&mut document, &args.paths);
    print_value(&document, format)
}
