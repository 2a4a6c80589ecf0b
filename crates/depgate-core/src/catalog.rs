//! The declarative table binding dependency names to feature flags.
//!
//! Each [`FeatureMapping`] binds one flag to either a single dependency name
//! or a fixed list of names that must all be present. A [`Catalog`] is the
//! validated collection of mappings for one build target; every flag it
//! declares receives a value during derivation.

use crate::dependency::DependencySet;
use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Flag names are uppercase, underscore-separated words, e.g. `SL_WITH_JSON`.
static FLAG_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9]*(_[A-Z0-9]+)*$").unwrap());

/// The dependency condition a flag is gated on.
///
/// Serialized untagged, so a TOML entry reads either
/// `requires = "MongoC"` or `requires = ["UViz", "UMongoQA"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Requirement {
    /// Satisfied when this one name is declared.
    Single(String),
    /// Satisfied when every listed name is declared.
    All(Vec<String>),
}

impl Requirement {
    /// All dependency names this requirement refers to.
    pub fn names(&self) -> &[String] {
        match self {
            Requirement::Single(name) => std::slice::from_ref(name),
            Requirement::All(names) => names,
        }
    }

    /// Whether `deps` satisfies this requirement.
    pub fn is_satisfied_by(&self, deps: &DependencySet) -> bool {
        self.names().iter().all(|name| deps.contains(name))
    }

    /// Names this requirement needs that `deps` does not declare.
    pub fn missing_from(&self, deps: &DependencySet) -> Vec<String> {
        self.names()
            .iter()
            .filter(|name| !deps.contains(name))
            .cloned()
            .collect()
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureMapping {
    /// Compile-time symbol emitted for downstream compilation.
    pub flag: String,
    /// Dependency condition for the flag to resolve to 1.
    pub requires: Requirement,
}

impl FeatureMapping {
    /// Bind `flag` to the presence of one dependency.
    pub fn single(dependency: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            requires: Requirement::Single(dependency.into()),
        }
    }

    /// Bind `flag` to the presence of all of `dependencies`.
    pub fn all<I>(dependencies: I, flag: impl Into<String>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            flag: flag.into(),
            requires: Requirement::All(dependencies.into_iter().map(Into::into).collect()),
        }
    }

    /// Check the flag name and requirement are well formed.
    pub fn validate(&self) -> Result<()> {
        if !FLAG_NAME_PATTERN.is_match(&self.flag) {
            return Err(Error::InvalidFlagName {
                flag: self.flag.clone(),
                reason: "expected uppercase words separated by single underscores".to_string(),
            });
        }

        if self.requires.names().is_empty() {
            return Err(Error::InvalidRequirement {
                flag: self.flag.clone(),
                reason: "compound requirement lists no dependencies".to_string(),
            });
        }

        if self.requires.names().iter().any(|name| name.trim().is_empty()) {
            return Err(Error::InvalidRequirement {
                flag: self.flag.clone(),
                reason: "dependency name is empty".to_string(),
            });
        }

        Ok(())
    }
}

/// A validated table of feature mappings.
///
/// Flags are unique within a catalog, so derivation maps each flag to
/// exactly one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    mappings: Vec<FeatureMapping>,
}

impl Catalog {
    /// Build a catalog, validating every mapping and rejecting repeated flags.
    pub fn new(mappings: Vec<FeatureMapping>) -> Result<Self> {
        let mut seen = HashSet::new();
        for mapping in &mappings {
            mapping.validate()?;
            if !seen.insert(mapping.flag.as_str()) {
                return Err(Error::DuplicateFlag {
                    flag: mapping.flag.clone(),
                });
            }
        }
        Ok(Self { mappings })
    }

    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in table of `module`, if one exists.
    pub fn builtin_for(module: &str) -> Option<Self> {
        builtin_mappings(module).map(|mappings| Self { mappings })
    }

    /// Iterate over the mappings in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FeatureMapping> {
        self.mappings.iter()
    }

    /// Declared flag names, in declaration order.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.mappings.iter().map(|m| m.flag.as_str())
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Consume the catalog, returning its mappings.
    pub fn into_mappings(self) -> Vec<FeatureMapping> {
        self.mappings
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a FeatureMapping;
    type IntoIter = std::slice::Iter<'a, FeatureMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.mappings.iter()
    }
}

/// Module whose table is used when a target names none.
pub const DEFAULT_MODULE: &str = "USemLog";

/// Modules that ship a built-in table.
pub const BUILTIN_MODULES: [&str; 2] = ["USemLog", "USemLogVision"];

/// Built-in entries of `module`, each flag prefixed with the module's tag.
fn builtin_mappings(module: &str) -> Option<Vec<FeatureMapping>> {
    match module {
        "USemLog" => Some(default_module_mappings()),
        "USemLogVision" => Some(vec![
            FeatureMapping::single("MongoCxx", "SLVIS_WITH_LIBMONGO"),
            FeatureMapping::single("MongoC", "SLVIS_WITH_LIBMONGO_C"),
            FeatureMapping::single("MongoCxx", "SLVIS_WITH_LIBMONGO_CXX"),
        ]),
        _ => None,
    }
}

fn default_module_mappings() -> Vec<FeatureMapping> {
    vec![
        FeatureMapping::single("MongoC", "SL_WITH_LIBMONGO_C"),
        FeatureMapping::single("MongoCxx", "SL_WITH_LIBMONGO_CXX"),
        FeatureMapping::single("SRanipal", "SL_WITH_EYE_TRACKING"),
        FeatureMapping::single("UMCGrasp", "SL_WITH_MC_GRASP"),
        FeatureMapping::single("UROSBridge", "SL_WITH_ROSBRIDGE"),
        FeatureMapping::single("UConversions", "SL_WITH_ROS_CONVERSIONS"),
        FeatureMapping::single("UProtoMsgs", "SL_WITH_PROTO_MSGS"),
        FeatureMapping::single("SlicingLogic", "SL_WITH_SLICING"),
        FeatureMapping::all(["Json", "JsonUtilities"], "SL_WITH_JSON"),
        FeatureMapping::all(["UViz", "UMongoQA"], "SL_WITH_DATA_VIS"),
    ]
}
