//! Project context - the single-writer artifact accumulator
//!
//! One context exists per scaffolding run. Compositions register artifacts
//! into it; nothing touches the project directory until [`persist`] runs at
//! the end.
//!
//! [`persist`]: ProjectContext::persist

use crate::Result;
use bind_content::{EnvBinding, ManifestDocument};
use bind_fs::checksum;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

const LOCAL_DEV_CONFIG_FILE: &str = "localdev-config.json";
const MAPPINGS_FILE: &str = "mappings.json";
const DEPENDENCIES_FILE: &str = "dependencies.txt";
const DOCS_DIR: &str = "docs";
const SERVICES_DIR: &str = "services";

/// A README snippet registered for copying into the project docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadMeRef {
    pub source_file_path: PathBuf,
    pub target_file_name: String,
}

/// An instrumentation source file registered for copying into the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstrumentationRef {
    pub source_file_path: PathBuf,
    pub target_file_name: String,
    /// Service the file belongs to
    pub label: String,
}

/// Outcome of [`ProjectContext::persist`]: which artifact files were
/// written and which were skipped because their content was unchanged.
#[derive(Debug, Default, Serialize)]
pub struct PersistReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Accumulates artifacts for one project across service compositions.
///
/// Holds the destination root, the raw binding set, every registered
/// artifact, and the deployment manifest tree. The manifest is loaded once
/// on the first patch and serialized once in [`persist`], so patches from
/// later services build on patches from earlier ones.
///
/// [`persist`]: ProjectContext::persist
pub struct ProjectContext {
    root: PathBuf,
    app_name: String,
    binding_set: Value,
    dependencies: Vec<String>,
    mappings: Map<String, Value>,
    local_dev_config: Map<String, Value>,
    readmes: Vec<ReadMeRef>,
    instrumentation: Vec<InstrumentationRef>,
    manifest: Option<ManifestDocument>,
    manifest_dirty: bool,
}

impl ProjectContext {
    /// Create a context for a project rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, app_name: impl Into<String>, binding_set: Value) -> Self {
        Self {
            root: root.into(),
            app_name: app_name.into(),
            binding_set,
            dependencies: Vec::new(),
            mappings: Map::new(),
            local_dev_config: Map::new(),
            readmes: Vec::new(),
            instrumentation: Vec::new(),
            manifest: None,
            manifest_dirty: false,
        }
    }

    /// The destination project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The application name, as configured in `scaffold.toml`.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The full raw binding set.
    pub fn binding_set(&self) -> &Value {
        &self.binding_set
    }

    /// Binding data for one service, keyed by its bluemix name.
    pub fn binding_for(&self, bluemix_name: &str) -> Option<&Value> {
        self.binding_set.get(bluemix_name)
    }

    /// Register a dependency fragment.
    pub fn add_dependencies(&mut self, fragment: impl Into<String>) {
        self.dependencies.push(fragment.into());
    }

    /// Merge a mappings table. Later registrations win on key collisions.
    pub fn add_mappings(&mut self, table: Map<String, Value>) {
        for (key, value) in table {
            self.mappings.insert(key, value);
        }
    }

    /// Merge a local-dev config object. Later registrations win on key
    /// collisions.
    pub fn add_local_dev_config(&mut self, config: Map<String, Value>) {
        for (key, value) in config {
            self.local_dev_config.insert(key, value);
        }
    }

    /// Register a README snippet.
    pub fn add_readme(&mut self, readme: ReadMeRef) {
        self.readmes.push(readme);
    }

    /// Register an instrumentation source file.
    pub fn add_instrumentation(&mut self, instrumentation: InstrumentationRef) {
        self.instrumentation.push(instrumentation);
    }

    /// Location of the deployment manifest inside the project.
    pub fn manifest_path(&self) -> PathBuf {
        self.root
            .join("chart")
            .join(&self.app_name)
            .join("templates")
            .join("deployment.yaml")
    }

    /// Append an env entry to the deployment manifest.
    ///
    /// Returns `Ok(false)` when the project has no manifest file; absence
    /// is not an error. The manifest is loaded and parsed on the first
    /// patch; later patches reuse the cached tree, never the original
    /// text.
    pub fn patch_manifest(&mut self, binding: EnvBinding) -> Result<bool> {
        if self.manifest.is_none() {
            let path = self.manifest_path();
            if !path.is_file() {
                return Ok(false);
            }
            let text = bind_fs::read_text(&path)?;
            self.manifest = Some(ManifestDocument::parse(&text)?);
            debug!(path = %path.display(), "loaded deployment manifest");
        }
        if let Some(manifest) = self.manifest.as_mut() {
            manifest.append_env(binding)?;
            self.manifest_dirty = true;
        }
        Ok(true)
    }

    /// Write every accumulated artifact into the project directory.
    ///
    /// Targets whose content is already up to date are skipped. The
    /// patched manifest is serialized exactly once, here.
    pub fn persist(&self) -> Result<PersistReport> {
        let mut report = PersistReport::default();

        if !self.local_dev_config.is_empty() {
            let content = serde_json::to_string_pretty(&self.local_dev_config)?;
            self.write_if_changed(&self.root.join(LOCAL_DEV_CONFIG_FILE), &content, &mut report)?;
        }

        if !self.mappings.is_empty() {
            let content = serde_json::to_string_pretty(&self.mappings)?;
            self.write_if_changed(&self.root.join(MAPPINGS_FILE), &content, &mut report)?;
        }

        if !self.dependencies.is_empty() {
            let mut combined = String::new();
            for fragment in &self.dependencies {
                combined.push_str(fragment);
                if !fragment.ends_with('\n') {
                    combined.push('\n');
                }
            }
            self.write_if_changed(&self.root.join(DEPENDENCIES_FILE), &combined, &mut report)?;
        }

        for readme in &self.readmes {
            let content = bind_fs::read_text(&readme.source_file_path)?;
            let target = self.root.join(DOCS_DIR).join(&readme.target_file_name);
            self.write_if_changed(&target, &content, &mut report)?;
        }

        for inst in &self.instrumentation {
            let content = bind_fs::read_text(&inst.source_file_path)?;
            let target = self.root.join(SERVICES_DIR).join(&inst.target_file_name);
            self.write_if_changed(&target, &content, &mut report)?;
        }

        if self.manifest_dirty {
            if let Some(manifest) = &self.manifest {
                let content = manifest.render()?;
                self.write_if_changed(&self.manifest_path(), &content, &mut report)?;
            }
        }

        Ok(report)
    }

    fn write_if_changed(
        &self,
        path: &Path,
        content: &str,
        report: &mut PersistReport,
    ) -> Result<()> {
        if checksum::content_matches(path, content) {
            debug!(path = %path.display(), "content unchanged, skipping write");
            report.skipped.push(path.to_path_buf());
        } else {
            bind_fs::write_text(path, content)?;
            report.written.push(path.to_path_buf());
        }
        Ok(())
    }
}
