//! Conditional dependency inclusion.
//!
//! Some dependencies are only declared when the target configuration allows
//! it, for example editor-only modules that the integrator opted into. These
//! are injected into the [`DependencySet`] once, before flags are derived.
//!
//! Conditions are written either as a [`Predicate`] (the form used by target
//! manifests) or as any `Fn(&TargetConfig) -> bool`.
//!
//! ```
//! use depgate_core::condition::{Predicate, include_if};
//! use depgate_core::dependency::{DependencySet, Partition};
//! use depgate_core::target::{TargetConfig, TargetKind};
//!
//! let target = TargetConfig::new(TargetKind::Editor).with_toggle("includeEditorOnlyDeps", true);
//! let mut deps = DependencySet::new();
//!
//! let when = Predicate::All(vec![
//!     Predicate::Kind(TargetKind::Editor),
//!     Predicate::Toggle("includeEditorOnlyDeps".into()),
//! ]);
//! assert!(include_if(&mut deps, &target, &when, Partition::Private, "UnrealEd"));
//! assert!(deps.contains("UnrealEd"));
//! ```

use crate::dependency::{DependencySet, Partition};
use crate::error::{Error, Result};
use crate::target::{TargetConfig, TargetKind};
use serde::{Deserialize, Serialize};

/// A pure test over the target configuration.
pub trait Condition {
    fn holds(&self, target: &TargetConfig) -> bool;
}

impl<F> Condition for F
where
    F: Fn(&TargetConfig) -> bool,
{
    fn holds(&self, target: &TargetConfig) -> bool {
        self(target)
    }
}

/// Declarative condition over target kind and static toggles.
///
/// In TOML: `"always"`, `{ kind = "editor" }`, `{ toggle = "name" }`,
/// `{ all = [...] }`, `{ any = [...] }`, `{ not = {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Predicate {
    Always,
    Kind(TargetKind),
    Toggle(String),
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    pub fn evaluate(&self, target: &TargetConfig) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Kind(kind) => target.kind == *kind,
            Predicate::Toggle(toggle) => target.toggle(toggle),
            Predicate::All(preds) => preds.iter().all(|p| p.evaluate(target)),
            Predicate::Any(preds) => preds.iter().any(|p| p.evaluate(target)),
            Predicate::Not(pred) => !pred.evaluate(target),
        }
    }
}

impl Condition for Predicate {
    fn holds(&self, target: &TargetConfig) -> bool {
        self.evaluate(target)
    }
}

/// A dependency declared only when its condition holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalDependency {
    /// Dependency name to inject
    pub name: String,

    #[serde(default)]
    pub partition: Partition,

    pub when: Predicate,
}

impl ConditionalDependency {
    pub fn new(name: impl Into<String>, partition: Partition, when: Predicate) -> Self {
        Self {
            name: name.into(),
            partition,
            when,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidConditional {
                name: self.name.clone(),
                reason: "dependency name is empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Insert `name` into `partition` of `deps` when `condition` holds for `target`.
///
/// Returns whether the condition held. A name already present is left as is.
pub fn include_if<C>(
    deps: &mut DependencySet,
    target: &TargetConfig,
    condition: &C,
    partition: Partition,
    name: &str,
) -> bool
where
    C: Condition + ?Sized,
{
    if !condition.holds(target) {
        tracing::trace!(dependency = name, "Condition not met, skipping");
        return false;
    }
    if deps.insert(partition, name) {
        tracing::debug!(dependency = name, %partition, "Included conditional dependency");
    }
    true
}
