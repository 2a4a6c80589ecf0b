//! Configuration resolution with hierarchical merge
//!
//! The `ConfigResolver` loads and merges target manifests from multiple
//! sources, with later sources overriding earlier ones, and validates the
//! result into a [`ResolvedConfig`] ready for one evaluation pass.

use crate::Result;
use crate::catalog::Catalog;
use crate::condition::ConditionalDependency;
use crate::dependency::DependencySet;
use crate::resolve::{ResolvedFlags, TargetEvaluation};
use crate::target::{TargetConfig, TargetKind};
use std::path::{Path, PathBuf};

use super::manifest::TargetManifest;

/// Project manifest filename
pub const MANIFEST_FILENAME: &str = "depgate.toml";

/// Git-ignored local overrides filename
pub const LOCAL_MANIFEST_FILENAME: &str = "depgate.local.toml";

/// The validated configuration of one build target
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub target: TargetConfig,
    pub dependencies: DependencySet,
    pub conditionals: Vec<ConditionalDependency>,
    pub catalog: Catalog,
}

impl ResolvedConfig {
    /// Validate a merged manifest.
    pub fn from_manifest(manifest: TargetManifest) -> Result<Self> {
        for conditional in &manifest.conditional {
            conditional.validate()?;
        }
        let catalog = Catalog::new(manifest.flags)?;

        let target = TargetConfig {
            name: manifest.target.name,
            kind: manifest.target.kind.unwrap_or_default(),
            toggles: manifest.toggles,
        };
        let dependencies = DependencySet::from_partitions(
            manifest.dependencies.public,
            manifest.dependencies.private,
        );

        Ok(Self {
            target,
            dependencies,
            conditionals: manifest.conditional,
            catalog,
        })
    }

    /// Override the target kind.
    pub fn with_kind(mut self, kind: TargetKind) -> Self {
        self.target.kind = kind;
        self
    }

    /// Override a static toggle.
    pub fn with_toggle(mut self, toggle: impl Into<String>, enabled: bool) -> Self {
        self.target.toggles.insert(toggle.into(), enabled);
        self
    }

    /// Start an evaluation pass with conditional dependencies applied.
    pub fn evaluation(&self) -> TargetEvaluation {
        TargetEvaluation::new(self.target.clone(), self.dependencies.clone())
            .apply_conditionals(&self.conditionals)
    }

    /// Run a full evaluation pass.
    pub fn resolve_flags(&self) -> ResolvedFlags {
        self.evaluation().resolve(&self.catalog)
    }
}

/// Resolves configuration by merging multiple sources
///
/// Configuration is loaded from a hierarchy of sources:
/// 1. Built-in catalog (skipped when any layer sets `use_builtin_catalog = false`)
/// 2. Global defaults (<config_dir>/depgate/config.toml)
/// 3. Project manifest (depgate.toml)
/// 4. Local overrides (depgate.local.toml) - git-ignored
pub struct ConfigResolver {
    /// Directory holding the project manifest
    root: PathBuf,

    /// Override for the global config directory (used for testing).
    /// When `None`, the platform-appropriate directory is used via `dirs::config_dir()`.
    global_config_dir_override: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a new configuration resolver for the given project root
    ///
    /// Uses the platform-appropriate global config directory:
    /// - Linux: `~/.config/depgate/`
    /// - macOS: `~/Library/Application Support/depgate/`
    /// - Windows: `%APPDATA%\depgate\`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            global_config_dir_override: None,
        }
    }

    /// Create a resolver with a custom global config directory.
    pub fn with_global_config_dir(root: impl Into<PathBuf>, global_config_dir: PathBuf) -> Self {
        Self {
            root: root.into(),
            global_config_dir_override: Some(global_config_dir),
        }
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join("depgate"))
    }

    /// Merge all file layers, without the built-in catalog.
    pub fn load_layers(&self) -> Result<TargetManifest> {
        let mut manifest = TargetManifest::empty();

        if let Some(global_dir) = self.global_config_dir() {
            let global_config_path = global_dir.join("config.toml");
            if global_config_path.is_file() {
                tracing::debug!(?global_config_path, "Loading global config");
                manifest.merge(&TargetManifest::load(&global_config_path)?);
            } else {
                tracing::debug!(?global_config_path, "No global config found, skipping");
            }
        }

        let project_path = self.manifest_path();
        if project_path.is_file() {
            tracing::debug!(?project_path, "Loading project manifest");
            manifest.merge(&TargetManifest::load(&project_path)?);
        }

        let local_path = self.local_manifest_path();
        if local_path.is_file() {
            tracing::debug!(?local_path, "Loading local overrides");
            manifest.merge(&TargetManifest::load(&local_path)?);
        }

        Ok(manifest)
    }

    /// Merge every layer and validate the result.
    ///
    /// Missing layers are silently skipped. Invalid TOML or an invalid
    /// catalog in any layer produces an error.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let layers = self.load_layers()?;

        let mut manifest = if layers.use_builtin_catalog.unwrap_or(true) {
            tracing::debug!(module = layers.module(), "Using built-in catalog");
            TargetManifest::builtin(layers.module())?
        } else {
            tracing::debug!("Built-in catalog disabled");
            TargetManifest::empty()
        };
        manifest.merge(&layers);

        ResolvedConfig::from_manifest(manifest)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILENAME)
    }

    pub fn local_manifest_path(&self) -> PathBuf {
        self.root.join(LOCAL_MANIFEST_FILENAME)
    }

    /// Check if a project manifest exists
    pub fn has_config(&self) -> bool {
        self.manifest_path().is_file()
    }

    /// Check if local overrides exist
    pub fn has_local_overrides(&self) -> bool {
        self.local_manifest_path().is_file()
    }
}
