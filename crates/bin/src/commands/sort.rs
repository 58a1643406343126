//! Sort command.

use dotted::{Value, sort};

use crate::cli::SortArgs;
use crate::output::{OutputFormat, print_value};

/// Run the sort command
pub fn run(document: &Value, args: &SortArgs, format: OutputFormat) -> dotted::Result<()> {
    let sorted = if args.lexical {
        sort::numeric_multisort(document, &args.key, args.descending)?
    } else {
        sort::multisort(document, &args.key, args.descending)?
    };
    print_value(&sorted, format)
}
