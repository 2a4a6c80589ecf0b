//! Dependency-gated compile-time feature flags
//!
//! For each optional integration of a build target, `depgate-core` decides
//! whether its code compiles in by checking whether the integration's module
//! is a declared dependency of the target, and emits a `0`/`1` flag for
//! downstream compilation.
//!
//! - **Dependency lookup**: exact membership over public and private partitions
//! - **Catalog**: a validated table of dependency name(s) to flag name
//! - **Conditional inclusion**: dependencies injected from target kind and toggles
//! - **Derivation**: a single pass giving every catalog flag exactly one value
//! - **Configuration**: layered TOML target manifests
//!
//! # Example
//!
//! ```
//! use depgate_core::{Catalog, DependencySet, FeatureMapping, derive};
//!
//! let catalog = Catalog::new(vec![
//!     FeatureMapping::single("MongoC", "SL_WITH_LIBMONGO_C"),
//!     FeatureMapping::all(["UViz", "UMongoQA"], "SL_WITH_DATA_VIS"),
//! ])
//! .unwrap();
//!
//! let deps = DependencySet::from_partitions(["UViz"], ["Core", "MongoC"]);
//! let flags = derive(&catalog, &deps);
//!
//! assert_eq!(flags.value("SL_WITH_LIBMONGO_C"), Some(1));
//! assert_eq!(flags.value("SL_WITH_DATA_VIS"), Some(0));
//! ```

pub mod catalog;
pub mod condition;
pub mod config;
pub mod dependency;
pub mod error;
pub mod render;
pub mod resolve;
pub mod target;

pub use catalog::{Catalog, DEFAULT_MODULE, FeatureMapping, Requirement};
pub use condition::{Condition, ConditionalDependency, Predicate, include_if};
pub use config::{ConfigResolver, ResolvedConfig, TargetManifest};
pub use dependency::{DependencySet, Partition, exists};
pub use error::{Error, Result};
pub use render::OutputFormat;
pub use resolve::{FlagExplanation, ResolvedFlags, TargetEvaluation, derive, explain};
pub use target::{TargetConfig, TargetKind};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn error_config_not_found_displays_path() {
        let path = PathBuf::from("/plugins/USemLog/depgate.toml");
        let error = Error::ConfigNotFound { path };

        let display = format!("{}", error);
        assert!(
            display.contains("/plugins/USemLog/depgate.toml"),
            "Error display should contain the path, got: {}",
            display
        );
    }

    #[test]
    fn error_duplicate_flag_names_flag() {
        let error = Error::DuplicateFlag {
            flag: "SL_WITH_JSON".into(),
        };
        assert_eq!(error.to_string(), "Flag 'SL_WITH_JSON' is declared more than once");
    }

    #[test]
    fn error_unknown_module_lists_available_modules() {
        let error = Error::UnknownModule {
            module: "USemLogEd".into(),
        };
        assert_eq!(
            error.to_string(),
            "No built-in catalog for module 'USemLogEd' (available: USemLog, USemLogVision)"
        );
    }
}
