//! Check command implementation

use colored::Colorize;
use depgate_core::Error;

use super::Context;
use crate::cli::TargetArgs;
use crate::error::Result;

/// Run the check command
///
/// Fails when the project manifest is missing or any layer is invalid.
pub fn run_check(ctx: &Context) -> Result<()> {
    let resolver = ctx.resolver();
    if !resolver.has_config() {
        return Err(Error::ConfigNotFound {
            path: resolver.manifest_path(),
        }
        .into());
    }

    let config = ctx.load(&TargetArgs::default())?;
    println!(
        "{} {} flags, {} dependencies, {} conditional",
        "ok".green().bold(),
        config.catalog.len(),
        config.dependencies.len(),
        config.conditionals.len()
    );
    Ok(())
}
