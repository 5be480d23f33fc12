//! Template directory lookup
//!
//! Templates live under a single root, one directory per service location,
//! with one subdirectory per language:
//!
//! ```text
//! templates/
//!   service-cloudant/
//!     python/
//!       dependencies.template
//!       localdev-config.json.template
//!       mappings.json
//!       README.md
//!       instrumentation.py
//! ```
//!
//! Files carrying the `.template` extension are expanded before use;
//! everything else is copied or read verbatim.

use crate::{io, Result};
use std::path::{Path, PathBuf};

/// File name of the templated dependency fragment
const DEPENDENCIES_TEMPLATE: &str = "dependencies.template";
/// File name of the plain dependency fragment
const DEPENDENCIES_PLAIN: &str = "dependencies.txt";

/// Read access to the per-service, per-language template directories.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    /// Create a store rooted at a templates directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The templates root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one service's templates for one language.
    pub fn language_dir(&self, location: &str, language: &str) -> PathBuf {
        self.root.join(location).join(language)
    }

    /// Whether templates exist for this (service, language) pair.
    pub fn language_dir_exists(&self, location: &str, language: &str) -> bool {
        self.language_dir(location, language).is_dir()
    }

    /// Path to a file inside a language directory, when it exists.
    pub fn find(&self, location: &str, language: &str, file: &str) -> Option<PathBuf> {
        let path = self.language_dir(location, language).join(file);
        path.is_file().then_some(path)
    }

    /// Read a file from a language directory.
    pub fn read(&self, location: &str, language: &str, file: &str) -> Result<String> {
        io::read_text(&self.language_dir(location, language).join(file))
    }

    /// Locate the dependency fragment for a (service, language) pair.
    ///
    /// Looks for `dependencies.template` first, then `dependencies.txt`.
    /// Returns `None` when the service ships no dependencies for this
    /// language.
    pub fn find_dependency_fragment(&self, location: &str, language: &str) -> Option<PathBuf> {
        self.find(location, language, DEPENDENCIES_TEMPLATE)
            .or_else(|| self.find(location, language, DEPENDENCIES_PLAIN))
    }

    /// Whether a file follows the `.template` extension convention.
    pub fn is_template(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "template")
    }
}
