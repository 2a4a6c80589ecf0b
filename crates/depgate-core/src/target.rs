//! Build target configuration visible to conditional inclusion.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The kind of binary a build target produces.
///
/// Deserialization goes through [`FromStr`], so manifests accept any case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TargetKind {
    /// Editor build, with editor-only modules available.
    Editor,
    /// Standalone game build.
    #[default]
    Game,
    /// Standalone program (tools, commandlets).
    Program,
    /// Dedicated server.
    Server,
    /// Client-only build.
    Client,
}

impl TargetKind {
    /// All target kinds, in declaration order.
    pub const ALL: [TargetKind; 5] = [
        TargetKind::Editor,
        TargetKind::Game,
        TargetKind::Program,
        TargetKind::Server,
        TargetKind::Client,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Editor => "editor",
            TargetKind::Game => "game",
            TargetKind::Program => "program",
            TargetKind::Server => "server",
            TargetKind::Client => "client",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TargetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownTargetKind { kind: s.to_string() })
    }
}

impl TryFrom<String> for TargetKind {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Configuration of the build target being evaluated.
///
/// Toggles are static switches set by the integrator; a toggle that was
/// never set reads as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Target name, for diagnostics only
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub kind: TargetKind,

    #[serde(default)]
    pub toggles: BTreeMap<String, bool>,
}

impl TargetConfig {
    pub fn new(kind: TargetKind) -> Self {
        Self {
            name: None,
            kind,
            toggles: BTreeMap::new(),
        }
    }

    /// Set the target name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a static toggle.
    pub fn with_toggle(mut self, toggle: impl Into<String>, enabled: bool) -> Self {
        self.toggles.insert(toggle.into(), enabled);
        self
    }

    /// Value of `toggle`, `false` when unset.
    pub fn toggle(&self, toggle: &str) -> bool {
        self.toggles.get(toggle).copied().unwrap_or(false)
    }

    /// Whether this is an editor build.
    pub fn is_editor(&self) -> bool {
        self.kind == TargetKind::Editor
    }
}
