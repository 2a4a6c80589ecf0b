//! Text forms of resolved flags handed to downstream compilation.

use crate::error::Result;
use crate::resolve::ResolvedFlags;
use serde::{Deserialize, Serialize};

/// How resolved flags are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `NAME=1` per line, as a definition list
    #[default]
    Definitions,
    /// `-DNAME=1` per line, as preprocessor arguments
    CompilerArgs,
    /// JSON object of flag name to 0 or 1
    Json,
}

impl ResolvedFlags {
    /// Render in the requested format. Line formats end with a newline
    /// unless there are no flags.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let rendered = match format {
            OutputFormat::Definitions => join_lines(self.definitions()),
            OutputFormat::CompilerArgs => join_lines(
                self.definitions()
                    .into_iter()
                    .map(|def| format!("-D{def}"))
                    .collect(),
            ),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(self)?;
                json.push('\n');
                json
            }
        };
        Ok(rendered)
    }
}

fn join_lines(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}
