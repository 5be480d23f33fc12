//! Deployment manifest patching
//!
//! Merges environment-variable entries into a YAML deployment manifest whose
//! body also contains Go-template (`{{ ... }}`) placeholders foreign to YAML.
//! The placeholders are escaped to inert sentinels before parsing and
//! restored after serialization, so they survive the round trip byte-for-byte.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Template open token: a single space followed by `{{`.
const PLACEHOLDER_OPEN: &str = " {{";
/// Template close token: `}}` immediately followed by a newline.
const PLACEHOLDER_CLOSE: &str = "}}\n";

// Sentinels must survive a YAML round trip as plain scalar content and must
// not collide with document or placeholder text. The open sentinel starts
// with a space so `key: {{ .x }}` lines stay valid mapping entries after
// escaping; the close sentinel keeps the newline.
const OPEN_SENTINEL: &str = " __BIND_TPL_OPEN__";
const CLOSE_SENTINEL: &str = "__BIND_TPL_CLOSE__\n";

/// One Kubernetes container `env` entry exposing a binding secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvBinding {
    pub name: String,
    #[serde(rename = "valueFrom")]
    pub value_from: ValueFrom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFrom {
    #[serde(rename = "secretKeyRef")]
    pub secret_key_ref: SecretKeyRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKeyRef {
    pub name: String,
    pub key: String,
}

impl EnvBinding {
    /// Build the conventional env entry for a service binding: the variable
    /// is named after the service (sanitized), and its value comes from the
    /// `binding` key of the `binding-<name>` secret.
    pub fn for_service(service_name: &str, binding_name: &str) -> Self {
        Self {
            name: sanitize_env_name(service_name),
            value_from: ValueFrom {
                secret_key_ref: SecretKeyRef {
                    name: format!("binding-{binding_name}"),
                    key: "binding".to_string(),
                },
            },
        }
    }
}

/// Sanitize a service name into a valid environment-variable name.
///
/// Host environment-variable names must match `[A-Za-z_][A-Za-z0-9_]*`, so
/// every hyphen is replaced by an underscore.
pub fn sanitize_env_name(name: &str) -> String {
    name.replace('-', "_")
}

/// A parsed deployment manifest with placeholders held in escaped form.
///
/// Obtained from [`ManifestDocument::parse`], patched with
/// [`append_env`](ManifestDocument::append_env), and serialized back with
/// [`render`](ManifestDocument::render).
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    root: serde_yaml::Value,
}

impl ManifestDocument {
    /// Parse manifest text, escaping `{{ ... }}` placeholder tokens first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when the escaped text is not valid YAML.
    pub fn parse(text: &str) -> Result<Self> {
        let escaped = escape_placeholders(text);
        let root: serde_yaml::Value =
            serde_yaml::from_str(&escaped).map_err(|e| Error::parse("YAML", e.to_string()))?;
        Ok(Self { root })
    }

    /// Append an env entry to the first container.
    ///
    /// Locates `spec.template.spec.containers[0].env`; a missing `env` key
    /// is materialized as an empty sequence. The entry is appended, never
    /// deduplicated or reordered. Duplicate names across invocations are
    /// the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ManifestShape`] when the manifest lacks the
    /// expected `containers` nesting.
    pub fn append_env(&mut self, binding: EnvBinding) -> Result<()> {
        let containers = self
            .root
            .get_mut("spec")
            .and_then(|v| v.get_mut("template"))
            .and_then(|v| v.get_mut("spec"))
            .and_then(|v| v.get_mut("containers"))
            .ok_or_else(|| Error::manifest_shape("missing spec.template.spec.containers"))?;

        let containers = containers
            .as_sequence_mut()
            .ok_or_else(|| Error::manifest_shape("containers is not a sequence"))?;
        let first = containers
            .first_mut()
            .ok_or_else(|| Error::manifest_shape("containers is empty"))?;
        let container = first
            .as_mapping_mut()
            .ok_or_else(|| Error::manifest_shape("containers[0] is not a mapping"))?;

        let env = container
            .entry(serde_yaml::Value::String("env".to_string()))
            .or_insert_with(|| serde_yaml::Value::Sequence(Vec::new()));
        let env = env
            .as_sequence_mut()
            .ok_or_else(|| Error::manifest_shape("containers[0].env is not a sequence"))?;

        let entry =
            serde_yaml::to_value(&binding).map_err(|e| Error::parse("YAML", e.to_string()))?;
        env.push(entry);
        Ok(())
    }

    /// Serialize the manifest back to text.
    ///
    /// Serializes the tree, normalizes quoting (doubled single-quotes first,
    /// then bare single-quotes, both rewritten to double quotes), and
    /// restores the placeholder tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when the tree cannot be serialized.
    pub fn render(&self) -> Result<String> {
        let serialized =
            serde_yaml::to_string(&self.root).map_err(|e| Error::parse("YAML", e.to_string()))?;
        Ok(unescape_placeholders(&normalize_quotes(&serialized)))
    }
}

/// One-shot parse, append, render for callers holding only manifest text.
pub fn inject(manifest_text: &str, binding: &EnvBinding) -> Result<String> {
    let mut doc = ManifestDocument::parse(manifest_text)?;
    doc.append_env(binding.clone())?;
    doc.render()
}

fn escape_placeholders(text: &str) -> String {
    text.replace(PLACEHOLDER_OPEN, OPEN_SENTINEL)
        .replace(PLACEHOLDER_CLOSE, CLOSE_SENTINEL)
}

fn unescape_placeholders(text: &str) -> String {
    text.replace(OPEN_SENTINEL, PLACEHOLDER_OPEN)
        .replace(CLOSE_SENTINEL, PLACEHOLDER_CLOSE)
}

/// Rewrite all single quotes in serialized output to double quotes.
///
/// The YAML emitter prefers single-quoted style for strings that need
/// quoting, which breaks downstream consumers of the manifest that expect
/// double quotes around template expressions. The rewrite applies to the
/// whole document, including quotes the patch did not introduce, and
/// mangles literal apostrophes inside values.
fn normalize_quotes(text: &str) -> String {
    text.replace("''", "\"").replace('\'', "\"")
}
