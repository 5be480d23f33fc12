//! SHA-256 checksum utilities
//!
//! A single canonical checksum format (`sha256:<hex>`) used to detect
//! whether a generated artifact's content has changed since the last run.

use sha2::{Digest, Sha256};
use std::path::Path;

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of string content.
///
/// Returns a string in the canonical format `"sha256:<hex>"`.
pub fn compute_content_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the SHA-256 checksum of a file's contents.
///
/// Returns a string in the canonical format `"sha256:<hex>"`.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn compute_file_checksum(path: &Path) -> std::io::Result<String> {
    let content = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    Ok(format!("{}{:x}", PREFIX, hasher.finalize()))
}

/// Check whether a file already holds exactly this content.
///
/// Returns `false` when the file is missing or unreadable, so callers can
/// use it directly as a skip-the-write test.
pub fn content_matches(path: &Path, content: &str) -> bool {
    match compute_file_checksum(path) {
        Ok(existing) => existing == compute_content_checksum(content),
        Err(_) => false,
    }
}
