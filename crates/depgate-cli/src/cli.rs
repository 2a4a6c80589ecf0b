//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use depgate_core::{OutputFormat, TargetKind};

/// depgate - Derive compile-time feature flags from declared dependencies
#[derive(Parser, Debug)]
#[command(name = "depgate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding depgate.toml
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Directory holding the global config.toml
    #[arg(long, global = true, env = "DEPGATE_CONFIG_DIR")]
    pub global_config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve every catalog flag for the target
    ///
    /// Examples:
    ///   depgate resolve                          # NAME=0|1 per line
    ///   depgate resolve --format compiler-args   # -DNAME=0|1 per line
    ///   depgate resolve --kind editor --toggle includeEditorOnlyDeps
    Resolve {
        #[command(flatten)]
        target: TargetArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Definitions)]
        format: FormatArg,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show each flag with the dependencies it requires and which are missing
    Explain {
        #[command(flatten)]
        target: TargetArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List the effective catalog
    Catalog {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Validate the layered configuration
    Check,
}

/// Overrides applied on top of the loaded configuration
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetArgs {
    /// Override the target kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Set a toggle: NAME, NAME=true or NAME=false (repeatable)
    #[arg(short, long = "toggle", value_parser = parse_toggle)]
    pub toggles: Vec<(String, bool)>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Editor,
    Game,
    Program,
    Server,
    Client,
}

impl From<KindArg> for TargetKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Editor => TargetKind::Editor,
            KindArg::Game => TargetKind::Game,
            KindArg::Program => TargetKind::Program,
            KindArg::Server => TargetKind::Server,
            KindArg::Client => TargetKind::Client,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Definitions,
    CompilerArgs,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Definitions => OutputFormat::Definitions,
            FormatArg::CompilerArgs => OutputFormat::CompilerArgs,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn parse_toggle(raw: &str) -> Result<(String, bool), String> {
    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name.trim(), value.trim()),
        None => (raw.trim(), "true"),
    };
    if name.is_empty() {
        return Err(format!("toggle name is empty in '{raw}'"));
    }
    let enabled = match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => true,
        "false" | "0" | "off" | "no" => false,
        other => return Err(format!("invalid toggle value '{other}', expected true or false")),
    };
    Ok((name.to_string(), enabled))
}
