use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod input;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> ExitCode {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dotted=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(module = e.module(), "Command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> dotted::Result<()> {
    let format = OutputFormat::from_pretty(cli.pretty);
    let document = input::read_document(cli.input.as_deref())?;

    match &cli.command {
        Commands::Dot(args) => commands::path::dot(&document, args, format),
        Commands::Undot => commands::path::undot(document, format),
        Commands::Get(args) => commands::path::get(&document, args, format),
        Commands::Has(args) => commands::path::has(&document, args),
        Commands::Set(args) => commands::path::set(document, args, format),
        Commands::Forget(args) => commands::path::forget(document, args, format),
        Commands::Only(args) => commands::filter::only(&document, args, format),
        Commands::Except(args) => commands::filter::except(&document, args, format),
        Commands::Missing(args) => commands::filter::missing(&document, args, format),
        Commands::Pluck(args) => commands::filter::pluck(&document, args, format),
        Commands::Sort(args) => commands::sort::run(&document, args, format),
        Commands::Query => commands::query::run(&document),
        Commands::Sample(args) => commands::sample::run(&document, args, format),
    }
}
