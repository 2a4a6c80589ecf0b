//! Target manifests and layered configuration resolution
//!
//! A build target's dependency partitions, toggles, conditional dependencies
//! and catalog entries are read from TOML manifests merged in order (later
//! sources override earlier):
//!
//! 1. **Built-in catalog** - the plugin's own flag table
//! 2. **Global defaults** - `<config_dir>/depgate/config.toml`
//! 3. **Project manifest** - `depgate.toml`
//! 4. **Local overrides** - `depgate.local.toml` (git-ignored)
//!
//! # Example
//!
//! ```ignore
//! use depgate_core::config::ConfigResolver;
//!
//! let config = ConfigResolver::new("/path/to/plugin").resolve()?;
//! let flags = config.resolve_flags();
//! ```

mod manifest;
mod resolver;

pub use manifest::{DependenciesSection, TargetManifest, TargetSection};
pub use resolver::{ConfigResolver, LOCAL_MANIFEST_FILENAME, MANIFEST_FILENAME, ResolvedConfig};
