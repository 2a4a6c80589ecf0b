//! Command implementations for depgate-cli

pub mod catalog;
pub mod check;
pub mod explain;
pub mod resolve;

pub use catalog::run_catalog;
pub use check::run_check;
pub use explain::run_explain;
pub use resolve::run_resolve;

use std::path::PathBuf;

use depgate_core::{ConfigResolver, ResolvedConfig};

use crate::cli::TargetArgs;
use crate::error::Result;

/// Where configuration is read from
#[derive(Debug, Clone)]
pub struct Context {
    pub root: PathBuf,
    pub global_config: Option<PathBuf>,
}

impl Context {
    pub fn resolver(&self) -> ConfigResolver {
        match &self.global_config {
            Some(dir) => ConfigResolver::with_global_config_dir(&self.root, dir.clone()),
            None => ConfigResolver::new(&self.root),
        }
    }

    /// Load the layered configuration and apply command-line overrides.
    pub fn load(&self, overrides: &TargetArgs) -> Result<ResolvedConfig> {
        let mut config = self.resolver().resolve()?;
        if let Some(kind) = overrides.kind {
            config = config.with_kind(kind.into());
        }
        for (toggle, enabled) in &overrides.toggles {
            config = config.with_toggle(toggle.clone(), *enabled);
        }
        tracing::debug!(
            kind = %config.target.kind,
            toggles = config.target.toggles.len(),
            "Loaded target configuration"
        );
        Ok(config)
    }
}
