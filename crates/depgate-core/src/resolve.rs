//! Flag derivation.
//!
//! [`derive`] maps every catalog entry to exactly one boolean in a single
//! pass. [`TargetEvaluation`] wraps the per-target lifecycle: conditional
//! dependencies are injected while the evaluation is open, and resolving
//! consumes it, so the dependency set cannot change after flags exist.

use crate::catalog::{Catalog, FeatureMapping};
use crate::condition::{Condition, ConditionalDependency, include_if};
use crate::dependency::{DependencySet, Partition};
use crate::target::TargetConfig;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Resolved value of every flag in a catalog.
///
/// Serializes as an object of flag name to the integer literal `0` or `1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFlags {
    flags: BTreeMap<String, bool>,
}

impl ResolvedFlags {
    /// Whether `flag` resolved to 1. Undeclared flags return `None`.
    pub fn get(&self, flag: &str) -> Option<bool> {
        self.flags.get(flag).copied()
    }

    /// Integer value of `flag`, as substituted into compilation.
    pub fn value(&self, flag: &str) -> Option<u8> {
        self.get(flag).map(u8::from)
    }

    pub fn is_enabled(&self, flag: &str) -> bool {
        self.get(flag).unwrap_or(false)
    }

    /// Flags and values, sorted by flag name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(flag, &on)| (flag.as_str(), on))
    }

    /// Names of flags that resolved to 1.
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, on)| *on).map(|(flag, _)| flag)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// `NAME=0|1` definitions, sorted by flag name.
    pub fn definitions(&self) -> Vec<String> {
        self.iter()
            .map(|(flag, on)| format!("{}={}", flag, u8::from(on)))
            .collect()
    }
}

impl Serialize for ResolvedFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.flags.iter().map(|(flag, &on)| (flag, u8::from(on))))
    }
}

/// Resolve every flag in `catalog` against `deps`.
pub fn derive(catalog: &Catalog, deps: &DependencySet) -> ResolvedFlags {
    let flags = catalog
        .iter()
        .map(|mapping| {
            let on = mapping.requires.is_satisfied_by(deps);
            tracing::trace!(flag = %mapping.flag, on, "Resolved flag");
            (mapping.flag.clone(), on)
        })
        .collect();
    ResolvedFlags { flags }
}

/// Why a flag resolved the way it did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagExplanation {
    pub flag: String,
    pub enabled: bool,
    /// Every dependency name the flag requires
    pub requires: Vec<String>,
    /// Required names not declared by the target
    pub missing: Vec<String>,
}

impl FlagExplanation {
    fn from_mapping(mapping: &FeatureMapping, deps: &DependencySet) -> Self {
        let missing = mapping.requires.missing_from(deps);
        Self {
            flag: mapping.flag.clone(),
            enabled: missing.is_empty(),
            requires: mapping.requires.names().to_vec(),
            missing,
        }
    }
}

/// Explain each catalog entry against `deps`, in catalog order.
pub fn explain(catalog: &Catalog, deps: &DependencySet) -> Vec<FlagExplanation> {
    catalog
        .iter()
        .map(|mapping| FlagExplanation::from_mapping(mapping, deps))
        .collect()
}

/// One build-target evaluation pass.
///
/// ```
/// use depgate_core::{Catalog, DependencySet, FeatureMapping, Partition, Predicate};
/// use depgate_core::{TargetConfig, TargetEvaluation, TargetKind};
///
/// let catalog = Catalog::new(vec![FeatureMapping::single("UnrealEd", "SL_WITH_EDITOR")]).unwrap();
/// let target = TargetConfig::new(TargetKind::Editor);
///
/// let flags = TargetEvaluation::new(target, DependencySet::new())
///     .include_if(&Predicate::Kind(TargetKind::Editor), Partition::Private, "UnrealEd")
///     .resolve(&catalog);
///
/// assert_eq!(flags.value("SL_WITH_EDITOR"), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct TargetEvaluation {
    target: TargetConfig,
    deps: DependencySet,
}

impl TargetEvaluation {
    pub fn new(target: TargetConfig, deps: DependencySet) -> Self {
        Self { target, deps }
    }

    /// Inject `name` when `condition` holds for this target.
    pub fn include_if<C>(mut self, condition: &C, partition: Partition, name: &str) -> Self
    where
        C: Condition + ?Sized,
    {
        include_if(&mut self.deps, &self.target, condition, partition, name);
        self
    }

    /// Apply every declarative conditional dependency in order.
    pub fn apply_conditionals(mut self, conditionals: &[ConditionalDependency]) -> Self {
        for conditional in conditionals {
            include_if(
                &mut self.deps,
                &self.target,
                &conditional.when,
                conditional.partition,
                &conditional.name,
            );
        }
        self
    }

    pub fn target(&self) -> &TargetConfig {
        &self.target
    }

    pub fn dependencies(&self) -> &DependencySet {
        &self.deps
    }

    /// Finalize the dependency set and derive flags from it.
    pub fn resolve(self, catalog: &Catalog) -> ResolvedFlags {
        tracing::debug!(
            target_name = self.target.name.as_deref().unwrap_or("<unnamed>"),
            kind = %self.target.kind,
            dependencies = self.deps.len(),
            flags = catalog.len(),
            "Deriving feature flags"
        );
        derive(catalog, &self.deps)
    }

    /// Finalize the dependency set and explain each flag.
    pub fn explain(self, catalog: &Catalog) -> Vec<FlagExplanation> {
        explain(catalog, &self.deps)
    }
}
