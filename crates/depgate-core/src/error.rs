//! Error types for depgate-core

use std::path::PathBuf;

/// Result type for depgate-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a catalog or loading target configuration.
///
/// Flag derivation itself never fails; every variant here is raised before
/// derivation runs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Flag name does not follow the `MODULE_WITH_FEATURE` convention
    #[error("Invalid flag name '{flag}': {reason}")]
    InvalidFlagName { flag: String, reason: String },

    /// The same flag is bound by more than one catalog entry
    #[error("Flag '{flag}' is declared more than once")]
    DuplicateFlag { flag: String },

    /// A catalog entry carries an unusable requirement
    #[error("Invalid requirement for flag '{flag}': {reason}")]
    InvalidRequirement { flag: String, reason: String },

    /// A conditional dependency entry is malformed
    #[error("Invalid conditional dependency '{name}': {reason}")]
    InvalidConditional { name: String, reason: String },

    /// No built-in catalog exists for the named module
    #[error(
        "No built-in catalog for module '{module}' (available: {})",
        crate::catalog::BUILTIN_MODULES.join(", ")
    )]
    UnknownModule { module: String },

    /// Unrecognized target kind string
    #[error("Unknown target kind: {kind}")]
    UnknownTargetKind { kind: String },

    /// Configuration file not found at expected path
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}
