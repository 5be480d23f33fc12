//! Template expansion seam
//!
//! The composer never calls the template engine directly; everything goes
//! through this wrapper.

use crate::{Error, Result};
use minijinja::{Environment, UndefinedBehavior};
use serde_json::Value;
use std::collections::BTreeMap;

/// Thin wrapper around the template engine.
///
/// Undefined variables render as empty strings, so a fragment referencing
/// a config key the service did not resolve still expands.
#[derive(Debug)]
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        Self { env }
    }

    /// Expand template text against a resolved configuration map.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] when the template itself is malformed.
    pub fn expand(&self, template: &str, context: &BTreeMap<String, Value>) -> Result<String> {
        self.env
            .render_str(template, context)
            .map_err(|e| Error::template(e.to_string()))
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
