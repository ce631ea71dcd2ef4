//! # sprig-cli
//!
//! Command-line client for the Sprig package registry.
//!
//! This is the main entry point for the `sprig` tool. It handles command
//! parsing, sets up logging and error handling, and dispatches to the
//! appropriate command handlers. All type/option validation happens here at
//! the boundary; the client library itself is deliberately permissive.

use clap::{Parser, Subcommand};
use sprig_core::error::SprigResult;
use tracing::error;

mod commands;
mod output;

use commands::fetch::FetchArgs;
use commands::search::SearchArgs;
use commands::CommandContext;
use output::errors::ErrorFormatter;

/// Command-line client for the Sprig package registry
#[derive(Parser)]
#[command(name = "sprig", version, about = "Fetch records from the Sprig registry")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a package, profile, or version record (or a collection with `*`)
    Fetch(FetchArgs),
    /// Search packages by free text
    Search(SearchArgs),
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    if let Err(err) = run_cli(cli) {
        let formatter = ErrorFormatter::new();
        eprintln!("{}", formatter.format_error(&err));
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> SprigResult<()> {
    // Create Tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().map_err(|e| {
        sprig_core::error::SprigError::transport("Failed to create async runtime".to_string(), e)
    })?;

    rt.block_on(async {
        let ctx = CommandContext::new()?;
        commands::dispatch_command(cli.command, &ctx).await
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(format!("sprig_cli={},sprig_client={}", level, level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Sprig encountered an unexpected error: {}", panic_info);
        eprintln!("Sprig crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/sprig-pm/sprig/issues");
        eprintln!("Error: {}", panic_info);
    }));
}
