//! Run configuration loading

use crate::{Error, Result, io};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load a configuration document, detecting the format from the extension.
///
/// - `.toml` -> TOML
/// - `.json` -> JSON
///
/// # Errors
///
/// Returns [`Error::ConfigParse`] on malformed content and
/// [`Error::UnsupportedFormat`] for any other extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = io::read_text(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match extension.to_lowercase().as_str() {
        "toml" => toml::from_str(&content)
            .map_err(|e| Error::config_parse(path, "TOML", e.to_string())),
        "json" => serde_json::from_str(&content)
            .map_err(|e| Error::config_parse(path, "JSON", e.to_string())),
        _ => Err(Error::UnsupportedFormat {
            extension: extension.to_string(),
        }),
    }
}

/// Scaffolding run configuration, read from `scaffold.toml` at the project
/// root.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RunConfig {
    pub project: ProjectConfig,
    #[serde(default)]
    pub services: ServicesConfig,
}

/// `[project]` table: the application being scaffolded.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProjectConfig {
    pub app_name: String,
    pub language: String,
}

/// `[services]` table: which services to compose and where their binding
/// data lives.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ServicesConfig {
    /// Restrict the run to these service tags; `None` means every service
    /// with binding data.
    #[serde(default)]
    pub only: Option<Vec<String>>,
    /// Binding set document, relative to the project root.
    #[serde(default = "default_bindings")]
    pub bindings: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            only: None,
            bindings: default_bindings(),
        }
    }
}

fn default_bindings() -> String {
    "bindings.json".to_string()
}

impl RunConfig {
    /// Load the run configuration from a `scaffold.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        load_document(path)
    }
}
