//! Dotted-path resolution and manifest patching
//!
//! The pure core of the binding scaffolder: resolves descriptor
//! configuration paths against raw binding data, and merges environment
//! entries into YAML deployment manifests that carry foreign `{{ ... }}`
//! template placeholders. No filesystem access and no logging; callers
//! hand in text and trees and get text and trees back.

pub mod error;
pub mod manifest;
pub mod path;
pub mod resolver;

pub use error::{Error, Result};
pub use manifest::{
    EnvBinding, ManifestDocument, SecretKeyRef, ValueFrom, inject, sanitize_env_name,
};
pub use path::{PathSegment, get_at_path, parse_path};
pub use resolver::{resolve, resolved_key};
