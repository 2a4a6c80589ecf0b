//! Explain command implementation

use colored::Colorize;

use super::Context;
use crate::cli::TargetArgs;
use crate::error::Result;

/// Run the explain command
pub fn run_explain(ctx: &Context, overrides: &TargetArgs, json: bool) -> Result<()> {
    let config = ctx.load(overrides)?;
    let explanations = config.evaluation().explain(&config.catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&explanations)?);
        return Ok(());
    }

    let name = config.target.name.as_deref().unwrap_or("target");
    println!("{} ({})", name.bold(), config.target.kind.to_string().cyan());
    println!();

    if explanations.is_empty() {
        println!("  {}", "No flags declared".dimmed());
        return Ok(());
    }

    for explanation in &explanations {
        if explanation.enabled {
            println!(
                "  {} {} = 1  ({})",
                "+".green(),
                explanation.flag,
                explanation.requires.join(" + ").dimmed()
            );
        } else {
            println!(
                "  {} {} = 0  (missing: {})",
                "-".red(),
                explanation.flag,
                explanation.missing.join(", ").yellow()
            );
        }
    }
    Ok(())
}
