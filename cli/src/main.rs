#![deny(missing_docs)]

//! # oas-typed
//!
//! Command line inspector for typed OpenAPI documents.
//!
//! Supported Commands:
//! - `inspect`: Prints a summary of paths, operations and component schemas.
//! - `dump`: Prints the whole typed graph as JSON or YAML.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod dump;
mod error;
mod inspect;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Typed OpenAPI document inspector")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a document and print a summary.
    Inspect(inspect::InspectArgs),
    /// Parse a document and print the typed graph.
    Dump(dump::DumpArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    let result = match &cli.command {
        Commands::Inspect(args) => inspect::execute(args, &mut stdout),
        Commands::Dump(args) => dump::execute(args, &mut stdout),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_global_verbose() {
        let cli = Cli::try_parse_from(["oas-typed", "dump", "api.yaml", "-v", "--output", "yaml"])
            .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dump(_)));
    }
}
