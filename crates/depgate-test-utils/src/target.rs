//! [`TestTarget`] builder for on-disk target manifests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory holding target manifests, with its own
/// isolated global config directory.
///
/// # Example
///
/// ```rust,no_run
/// use depgate_test_utils::TestTarget;
///
/// let target = TestTarget::new();
/// target
///     .kind("editor")
///     .private_deps(&["Core", "MongoC"])
///     .write();
/// assert!(target.root().join("depgate.toml").is_file());
/// ```
pub struct TestTarget {
    temp_dir: TempDir,
}

impl Default for TestTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTarget {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the project root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory to use as the global config directory. Never created
    /// unless [`TestTarget::write_global`] is called.
    pub fn global_dir(&self) -> PathBuf {
        self.root().join(".global")
    }

    /// Start building the project manifest (`depgate.toml`).
    pub fn kind(&self, kind: &str) -> ManifestBuilder<'_> {
        ManifestBuilder::new(self, "depgate.toml").kind(kind)
    }

    /// Start building the project manifest with no preset fields.
    pub fn manifest(&self) -> ManifestBuilder<'_> {
        ManifestBuilder::new(self, "depgate.toml")
    }

    /// Start building the local overrides (`depgate.local.toml`).
    pub fn local(&self) -> ManifestBuilder<'_> {
        ManifestBuilder::new(self, "depgate.local.toml")
    }

    /// Write raw TOML to `relative` under the project root.
    pub fn write_raw(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Write raw TOML as the global `config.toml`.
    pub fn write_global(&self, content: &str) {
        let dir = self.global_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), content).unwrap();
    }
}

/// Accumulates manifest sections and writes them in valid TOML order:
/// top-level keys, then tables, then arrays of tables.
pub struct ManifestBuilder<'a> {
    target: &'a TestTarget,
    file: &'static str,
    top_level: Vec<String>,
    target_section: Vec<String>,
    toggles: Vec<String>,
    dependencies: Vec<String>,
    arrays: Vec<String>,
}

impl<'a> ManifestBuilder<'a> {
    fn new(target: &'a TestTarget, file: &'static str) -> Self {
        Self {
            target,
            file,
            top_level: Vec::new(),
            target_section: Vec::new(),
            toggles: Vec::new(),
            dependencies: Vec::new(),
            arrays: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.target_section.push(format!("name = \"{name}\""));
        self
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.target_section.push(format!("kind = \"{kind}\""));
        self
    }

    /// Module whose built-in catalog forms the base layer.
    pub fn module(mut self, module: &str) -> Self {
        self.target_section.push(format!("module = \"{module}\""));
        self
    }

    pub fn without_builtin_catalog(self) -> Self {
        self.builtin_catalog(false)
    }

    pub fn builtin_catalog(mut self, enabled: bool) -> Self {
        self.top_level.push(format!("use_builtin_catalog = {enabled}"));
        self
    }

    pub fn toggle(mut self, name: &str, enabled: bool) -> Self {
        self.toggles.push(format!("{name} = {enabled}"));
        self
    }

    pub fn public_deps(mut self, names: &[&str]) -> Self {
        self.dependencies.push(format!("public = [{}]", quoted(names)));
        self
    }

    pub fn private_deps(mut self, names: &[&str]) -> Self {
        self.dependencies.push(format!("private = [{}]", quoted(names)));
        self
    }

    /// Add a single-dependency flag.
    pub fn flag(mut self, flag: &str, requires: &str) -> Self {
        self.arrays.push(format!(
            "[[flags]]\nflag = \"{flag}\"\nrequires = \"{requires}\"\n"
        ));
        self
    }

    /// Add a compound flag.
    pub fn compound_flag(mut self, flag: &str, requires: &[&str]) -> Self {
        self.arrays.push(format!(
            "[[flags]]\nflag = \"{flag}\"\nrequires = [{}]\n",
            quoted(requires)
        ));
        self
    }

    /// Add a conditional dependency; `when` is an inline TOML predicate.
    pub fn conditional(mut self, name: &str, partition: &str, when: &str) -> Self {
        self.arrays.push(format!(
            "[[conditional]]\nname = \"{name}\"\npartition = \"{partition}\"\nwhen = {when}\n"
        ));
        self
    }

    /// Render the manifest without writing it.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.top_level {
            out.push_str(line);
            out.push('\n');
        }
        push_table(&mut out, "target", &self.target_section);
        push_table(&mut out, "toggles", &self.toggles);
        push_table(&mut out, "dependencies", &self.dependencies);
        for array in &self.arrays {
            out.push('\n');
            out.push_str(array);
        }
        out
    }

    /// Write the manifest to disk and return its path.
    pub fn write(self) -> PathBuf {
        let path = self.target.root().join(self.file);
        fs::write(&path, self.render()).unwrap();
        path
    }
}

fn push_table(out: &mut String, header: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    out.push_str(&format!("\n[{header}]\n"));
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
}

fn quoted(names: &[&str]) -> String {
    names
        .iter()
        .map(|n| format!("\"{}\"", n))
        .collect::<Vec<_>>()
        .join(", ")
}
