//! Manifest parsing for depgate.toml files
//!
//! A manifest is the parsed content of a single configuration file. Several
//! manifests (built-in, global, project, local) are merged into one before
//! a target is evaluated.

use crate::Result;
use crate::catalog::{Catalog, DEFAULT_MODULE, FeatureMapping};
use crate::condition::ConditionalDependency;
use crate::error::Error;
use crate::target::TargetKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// `[target]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TargetKind>,

    /// Module whose built-in catalog is the base layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
}

/// `[dependencies]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependenciesSection {
    #[serde(default)]
    pub public: Vec<String>,

    #[serde(default)]
    pub private: Vec<String>,
}

/// Target configuration manifest parsed from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetManifest {
    /// Whether the built-in catalog is the base layer (default: yes).
    /// Once any layer sets `false`, later layers cannot turn it back on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_builtin_catalog: Option<bool>,

    #[serde(default)]
    pub target: TargetSection,

    /// Static toggles set by the integrator
    #[serde(default)]
    pub toggles: BTreeMap<String, bool>,

    #[serde(default)]
    pub dependencies: DependenciesSection,

    /// Dependencies injected when their condition holds
    #[serde(default)]
    pub conditional: Vec<ConditionalDependency>,

    /// Catalog entries
    #[serde(default)]
    pub flags: Vec<FeatureMapping>,
}

impl TargetManifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use depgate_core::config::TargetManifest;
    /// use depgate_core::TargetKind;
    ///
    /// let manifest = TargetManifest::parse(r#"
    /// [target]
    /// name = "USemLog"
    /// kind = "editor"
    ///
    /// [dependencies]
    /// private = ["Core", "MongoC"]
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.target.kind, Some(TargetKind::Editor));
    /// assert_eq!(manifest.dependencies.private, vec!["Core", "MongoC"]);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: TargetManifest = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reject a flag declared twice within this one manifest.
    ///
    /// Repeats across layers are overrides, not errors.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for mapping in &self.flags {
            if !seen.insert(mapping.flag.as_str()) {
                return Err(Error::DuplicateFlag {
                    flag: mapping.flag.clone(),
                });
            }
        }
        Ok(())
    }

    /// Read and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Create an empty manifest, equivalent to parsing an empty file.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A manifest holding only the built-in catalog of `module`.
    pub fn builtin(module: &str) -> Result<Self> {
        let catalog = Catalog::builtin_for(module).ok_or_else(|| Error::UnknownModule {
            module: module.to_string(),
        })?;
        Ok(Self {
            flags: catalog.into_mappings(),
            ..Self::default()
        })
    }

    /// Module named by the `[target]` section, or the default module.
    pub fn module(&self) -> &str {
        self.target.module.as_deref().unwrap_or(DEFAULT_MODULE)
    }

    /// Merge another manifest into this one
    ///
    /// The `other` manifest takes precedence for scalar values, except
    /// `use_builtin_catalog`, where `false` from either side sticks.
    /// For collections:
    /// - `toggles`: overlay keys override, base-only keys preserved
    /// - `dependencies`: each partition extended with unique names from other
    /// - `conditional`: appended
    /// - `flags`: an entry for an existing flag replaces it in place, new flags are appended
    pub fn merge(&mut self, other: &TargetManifest) {
        if self.use_builtin_catalog != Some(false) && other.use_builtin_catalog.is_some() {
            self.use_builtin_catalog = other.use_builtin_catalog;
        }
        if other.target.name.is_some() {
            self.target.name = other.target.name.clone();
        }
        if other.target.module.is_some() {
            self.target.module = other.target.module.clone();
        }
        if other.target.kind.is_some() {
            self.target.kind = other.target.kind;
        }

        for (toggle, &enabled) in &other.toggles {
            self.toggles.insert(toggle.clone(), enabled);
        }

        extend_unique(&mut self.dependencies.public, &other.dependencies.public);
        extend_unique(&mut self.dependencies.private, &other.dependencies.private);

        self.conditional.extend(other.conditional.iter().cloned());

        for mapping in &other.flags {
            match self.flags.iter_mut().find(|m| m.flag == mapping.flag) {
                Some(existing) => *existing = mapping.clone(),
                None => self.flags.push(mapping.clone()),
            }
        }
    }
}

fn extend_unique(base: &mut Vec<String>, other: &[String]) {
    for name in other {
        if !base.contains(name) {
            base.push(name.clone());
        }
    }
}
