//! Output formatting helpers for JSON output.

use dotted::Value;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Compact,
    Pretty,
}

impl OutputFormat {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            OutputFormat::Pretty
        } else {
            OutputFormat::Compact
        }
    }
}

/// Print a value as JSON on stdout.
pub fn print_value(value: &Value, format: OutputFormat) -> dotted::Result<()> {
    let json = match format {
        OutputFormat::Compact => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    println!("{json}");
    Ok(())
}
