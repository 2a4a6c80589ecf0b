//! Resolve command implementation

use std::path::Path;

use depgate_core::OutputFormat;

use super::Context;
use crate::cli::TargetArgs;
use crate::error::Result;

/// Run the resolve command
pub fn run_resolve(
    ctx: &Context,
    overrides: &TargetArgs,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let config = ctx.load(overrides)?;
    let flags = config.resolve_flags();
    let rendered = flags.render(format)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::debug!(?path, flags = flags.len(), "Wrote resolved flags");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
