//! Path parsing and traversal utilities
//!
//! Navigates raw binding data using dot-separated paths with array
//! indexing support.
//!
//! # Path Syntax
//!
//! - Dot-separated keys: `credentials.host`
//! - Array indexing: `cloudant[0].username`
//!
//! # Examples
//!
//! ```
//! use bind_content::path::{parse_path, PathSegment, get_at_path};
//! use serde_json::json;
//!
//! let path = parse_path("cloudant[0].username");
//! assert_eq!(path, vec![
//!     PathSegment::Key("cloudant".to_string()),
//!     PathSegment::Index(0),
//!     PathSegment::Key("username".to_string()),
//! ]);
//!
//! let binding = json!({"cloudant": [{"username": "admin"}]});
//! assert_eq!(get_at_path(&binding, &path), Some(&json!("admin")));
//! ```

use serde_json::Value;

/// A segment of a path - either a key or an array index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A key in an object (e.g., "username" in "cloudant[0].username")
    Key(String),
    /// An index in an array (e.g., 0 in `cloudant[0]`)
    Index(usize),
}

/// Parse a path string into segments.
///
/// Supports dot-separated keys with optional `[i]` array indices:
/// `cloudant[0].username`, `credentials.host`.
pub fn parse_path(path: &str) -> Vec<PathSegment> {
    let mut segments = Vec::new();
    let mut current_key = String::new();
    let mut chars = path.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '.' => {
                if !current_key.is_empty() {
                    segments.push(PathSegment::Key(current_key.clone()));
                    current_key.clear();
                }
            }
            '[' => {
                // Push the key before the bracket if we have one
                if !current_key.is_empty() {
                    segments.push(PathSegment::Key(current_key.clone()));
                    current_key.clear();
                }
                // Parse the index
                let mut index_str = String::new();
                for ch in chars.by_ref() {
                    if ch == ']' {
                        break;
                    }
                    index_str.push(ch);
                }
                if let Ok(index) = index_str.parse::<usize>() {
                    segments.push(PathSegment::Index(index));
                }
            }
            _ => {
                current_key.push(ch);
            }
        }
    }

    // Don't forget the last key
    if !current_key.is_empty() {
        segments.push(PathSegment::Key(current_key));
    }

    segments
}

/// Get a reference to the value at the given path.
///
/// Returns `None` if the path doesn't exist or an intermediate value
/// has the wrong shape. The input is never mutated.
///
/// # Examples
///
/// ```
/// use bind_content::path::{parse_path, get_at_path};
/// use serde_json::json;
///
/// let binding = json!({"credentials": {"host": "localhost"}});
/// let path = parse_path("credentials.host");
/// assert_eq!(get_at_path(&binding, &path), Some(&json!("localhost")));
///
/// let path = parse_path("credentials.missing");
/// assert_eq!(get_at_path(&binding, &path), None);
/// ```
pub fn get_at_path<'a>(value: &'a Value, segments: &[PathSegment]) -> Option<&'a Value> {
    let mut current = value;
    for segment in segments {
        current = match segment {
            PathSegment::Key(key) => current.get(key)?,
            PathSegment::Index(idx) => current.get(*idx)?,
        };
    }
    Some(current)
}
