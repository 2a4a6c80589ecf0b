//! Catalog command implementation

use colored::Colorize;
use depgate_core::Requirement;

use super::Context;
use crate::cli::TargetArgs;
use crate::error::Result;

/// Run the catalog command
pub fn run_catalog(ctx: &Context, json: bool) -> Result<()> {
    let config = ctx.load(&TargetArgs::default())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config.catalog)?);
        return Ok(());
    }

    println!("{}", "Feature Catalog".bold());
    println!();
    for mapping in &config.catalog {
        let requires = match &mapping.requires {
            Requirement::Single(name) => name.clone(),
            Requirement::All(names) => names.join(" AND "),
        };
        println!("  {} <- {}", mapping.flag.cyan(), requires);
    }
    Ok(())
}
