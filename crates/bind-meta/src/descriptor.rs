//! Core types for the service descriptor catalog

use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Target language of the scaffolded project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTarget {
    /// Node.js / Express projects
    Node,
    /// Python / Flask projects
    Python,
    /// Swift / Kitura projects
    Swift,
    /// Java / Liberty projects
    Java,
}

impl LanguageTarget {
    /// All supported language targets.
    pub const ALL: [LanguageTarget; 4] = [
        LanguageTarget::Node,
        LanguageTarget::Python,
        LanguageTarget::Swift,
        LanguageTarget::Java,
    ];

    /// Template subdirectory name for this language.
    pub fn template_dir(&self) -> &'static str {
        match self {
            LanguageTarget::Node => "node",
            LanguageTarget::Python => "python",
            LanguageTarget::Swift => "swift",
            LanguageTarget::Java => "java",
        }
    }
}

impl std::str::FromStr for LanguageTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "node" => Ok(LanguageTarget::Node),
            "python" => Ok(LanguageTarget::Python),
            "swift" => Ok(LanguageTarget::Swift),
            "java" => Ok(LanguageTarget::Java),
            _ => Err(Error::UnknownLanguage { name: s.into() }),
        }
    }
}

impl std::fmt::Display for LanguageTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.template_dir())
    }
}

/// One per-language instrumentation source reference.
///
/// Purely informational: names the source file inside the service's template
/// directory and the file name it should take inside the generated project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentationFile {
    /// File name inside the template directory (e.g., "instrumentation.py")
    pub source_file: String,
    /// File name inside the generated project (e.g., "service_cloudant.py")
    pub target_file: String,
}

impl InstrumentationFile {
    /// Create a new instrumentation file reference.
    pub fn new(source_file: impl Into<String>, target_file: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            target_file: target_file.into(),
        }
    }
}

/// Complete descriptor for one cloud service kind.
///
/// Constructed once from static data and read-only thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDescriptor {
    /// Service kind tag (e.g., "cloudant", "watson-tone-analyzer")
    pub name: String,
    /// Opaque identifier locating the template directory (e.g., "service-cloudant")
    pub location: String,
    /// Key under which this service's binding data appears in the binding set
    pub bluemix_name: String,
    /// Ordered dotted paths into the raw binding data, resolved for
    /// local-development configuration
    pub local_dev_config_paths: Vec<String>,
    /// Per-language instrumentation source references
    pub instrumentation: HashMap<LanguageTarget, Vec<InstrumentationFile>>,
}

impl ServiceDescriptor {
    /// Create a descriptor with no config paths or instrumentation.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        bluemix_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            bluemix_name: bluemix_name.into(),
            local_dev_config_paths: Vec::new(),
            instrumentation: HashMap::new(),
        }
    }

    /// Set the local-dev config paths (builder pattern).
    pub fn with_config_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.local_dev_config_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Add instrumentation entries for one language (builder pattern).
    pub fn with_instrumentation(
        mut self,
        language: LanguageTarget,
        files: Vec<InstrumentationFile>,
    ) -> Self {
        self.instrumentation.insert(language, files);
        self
    }

    /// Instrumentation entries for a language (empty when none are defined).
    pub fn instrumentation_for(&self, language: LanguageTarget) -> &[InstrumentationFile] {
        self.instrumentation
            .get(&language)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
