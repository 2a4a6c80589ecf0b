//! depgate CLI
//!
//! Resolves a build target's dependency-gated feature flags from its
//! layered manifests and prints them for downstream compilation.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    let ctx = Context {
        root: cli.root,
        global_config: cli.global_config,
    };

    match cli.command {
        Commands::Resolve {
            target,
            format,
            output,
        } => commands::run_resolve(&ctx, &target, format.into(), output.as_deref()),
        Commands::Explain { target, json } => commands::run_explain(&ctx, &target, json),
        Commands::Catalog { json } => commands::run_catalog(&ctx, json),
        Commands::Check => commands::run_check(&ctx),
    }
}
