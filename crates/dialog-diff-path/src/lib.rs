//! Path addressing for JSON-like documents.
//!
//! Paths are strings rooted at `$`: `.key` selects an object member and
//! `[n]` an array element, so `$.foo.bar[2].baz` addresses `baz` inside the
//! third element of `foo.bar`. Keys that would make the rendered form
//! ambiguous use the quoted bracket form, e.g. `$['a.b']`.
//!
//! Internally a path is an ordered list of [`PathStep`]s; strings are only
//! parsed and rendered at the boundary.
//!
//! # Example
//!
//! ```
//! use dialog_diff_path::{format_path, get, has, parse_path, PathStep};
//! use serde_json::json;
//!
//! let path = parse_path("$.foo[1]").unwrap();
//! assert_eq!(path, vec![PathStep::Key("foo".into()), PathStep::Index(1)]);
//! assert_eq!(format_path(&path), "$.foo[1]");
//!
//! let doc = json!({"foo": ["a", "b"]});
//! assert_eq!(get(&doc, "$.foo[1]"), Some(&json!("b")));
//! assert!(!has(&doc, "$.foo[2]"));
//! ```

use serde_json::Value;
use thiserror::Error;

pub mod types;
pub use types::{escape_key, is_plain_key, Path, PathStep};

mod parser;
pub use parser::PathParser;

/// The root path string.
pub const ROOT: &str = "$";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("unexpected character {ch:?} at offset {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("unexpected end of path")]
    UnexpectedEnd,
    #[error("invalid array index {0:?}")]
    InvalidIndex(String),
    #[error("unclosed quoted key")]
    UnclosedKey,
    #[error("invalid escape sequence in quoted key")]
    InvalidEscape,
    #[error("root path has no parent")]
    NoParent,
}

/// Parse a path string into steps.
///
/// # Example
///
/// ```
/// use dialog_diff_path::{parse_path, PathStep};
///
/// assert_eq!(parse_path("$").unwrap(), Vec::<PathStep>::new());
/// assert_eq!(parse_path("$.a[0]").unwrap().len(), 2);
/// assert!(parse_path("$.a[x]").is_err());
/// ```
pub fn parse_path(path: &str) -> Result<Path, PathError> {
    PathParser::parse(path)
}

/// Render steps as an absolute path string (`$` for the root).
///
/// # Example
///
/// ```
/// use dialog_diff_path::{format_path, PathStep};
///
/// assert_eq!(format_path(&[]), "$");
/// assert_eq!(format_path(&[PathStep::from("foo"), PathStep::from(2)]), "$.foo[2]");
/// ```
pub fn format_path(path: &[PathStep]) -> String {
    let mut out = String::from(ROOT);
    out.push_str(&format_relative(path));
    out
}

/// Render steps without the `$` root, e.g. `[2].name`.
pub fn format_relative(path: &[PathStep]) -> String {
    let mut out = String::with_capacity(path.len() * 8);
    for step in path {
        out.push_str(&step.to_string());
    }
    out
}

/// Check if a path points to the root value.
pub fn is_root(path: &[PathStep]) -> bool {
    path.is_empty()
}

/// Check if `parent` is a strict prefix of `child`.
///
/// # Example
///
/// ```
/// use dialog_diff_path::{is_child, PathStep};
///
/// let parent = vec![PathStep::from("foo")];
/// let child = vec![PathStep::from("foo"), PathStep::from(0)];
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// ```
pub fn is_child(parent: &[PathStep], child: &[PathStep]) -> bool {
    parent.len() < child.len() && child[..parent.len()] == *parent
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns [`PathError::NoParent`] for the root path.
pub fn parent(path: &[PathStep]) -> Result<Path, PathError> {
    if path.is_empty() {
        return Err(PathError::NoParent);
    }
    Ok(path[..path.len() - 1].to_vec())
}

/// Split a path into the container path and its trailing array index.
///
/// Returns `None` when the path does not end in an index step.
///
/// # Example
///
/// ```
/// use dialog_diff_path::{parse_path, split_index, PathStep};
///
/// let path = parse_path("$.list[3]").unwrap();
/// let (container, idx) = split_index(&path).unwrap();
/// assert_eq!(container, &[PathStep::from("list")][..]);
/// assert_eq!(idx, 3);
/// assert!(split_index(&parse_path("$.list").unwrap()).is_none());
/// ```
pub fn split_index(path: &[PathStep]) -> Option<(&[PathStep], usize)> {
    let (last, container) = path.split_last()?;
    last.as_index().map(|idx| (container, idx))
}

/// Check if a string represents a valid non-negative integer array index.
///
/// # Example
///
/// ```
/// use dialog_diff_path::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index(""));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Get a value from a document by path steps.
///
/// Returns `None` if any step is missing or addresses the wrong container
/// kind.
pub fn get_at<'a>(val: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        current = match (current, step) {
            (Value::Array(arr), PathStep::Index(idx)) => arr.get(*idx)?,
            (Value::Object(map), PathStep::Key(key)) => map.get(key)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a mutable reference to a value in a document by path steps.
pub fn get_mut<'a>(val: &'a mut Value, path: &[PathStep]) -> Option<&'a mut Value> {
    let mut current = val;
    for step in path {
        current = match (current, step) {
            (Value::Array(arr), PathStep::Index(idx)) => arr.get_mut(*idx)?,
            (Value::Object(map), PathStep::Key(key)) => map.get_mut(key)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Check whether a value exists at the given path steps.
pub fn has_at(val: &Value, path: &[PathStep]) -> bool {
    get_at(val, path).is_some()
}

/// Get a value from a document by path string.
///
/// `$` resolves to the whole document. A malformed path or a missing
/// intermediate yields `None`.
///
/// # Example
///
/// ```
/// use dialog_diff_path::get;
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": [10, 20]}});
/// assert_eq!(get(&doc, "$"), Some(&doc));
/// assert_eq!(get(&doc, "$.foo.bar[1]"), Some(&json!(20)));
/// assert_eq!(get(&doc, "$.foo.missing.deeper"), None);
/// ```
pub fn get<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    if path == ROOT {
        return Some(doc);
    }
    let steps = parse_path(path).ok()?;
    get_at(doc, &steps)
}

/// Check whether a value exists at the given path string.
pub fn has(doc: &Value, path: &str) -> bool {
    get(doc, path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(k: &str) -> PathStep {
        PathStep::from(k)
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[]), "$");
        assert_eq!(format_path(&[key("foo")]), "$.foo");
        assert_eq!(
            format_path(&[key("foo"), key("bar"), PathStep::Index(2), key("baz")]),
            "$.foo.bar[2].baz"
        );
        assert_eq!(format_path(&[key("a.b")]), "$['a.b']");
    }

    #[test]
    fn test_format_relative() {
        assert_eq!(format_relative(&[]), "");
        assert_eq!(format_relative(&[PathStep::Index(2)]), "[2]");
        assert_eq!(format_relative(&[PathStep::Index(0), key("name")]), "[0].name");
    }

    #[test]
    fn test_format_parse_inverse() {
        let paths = [
            "$",
            "$.foo",
            "$.foo.bar[2].baz",
            "$['a.b'][0]['it\\'s']",
            "$.$kind",
            "$.0",
        ];
        for p in paths {
            assert_eq!(format_path(&parse_path(p).unwrap()), p);
        }
    }

    #[test]
    fn test_is_root() {
        assert!(is_root(&[]));
        assert!(!is_root(&[key("foo")]));
    }

    #[test]
    fn test_is_child() {
        let parent_path = vec![key("foo")];
        let child = vec![key("foo"), key("bar")];
        let sibling = vec![key("baz")];

        assert!(is_child(&parent_path, &child));
        assert!(!is_child(&child, &parent_path));
        assert!(!is_child(&parent_path, &sibling));
        assert!(!is_child(&parent_path, &parent_path));
    }

    #[test]
    fn test_parent() {
        let path = vec![key("foo"), PathStep::Index(1)];
        assert_eq!(parent(&path).unwrap(), vec![key("foo")]);
        assert_eq!(parent(&[key("foo")]).unwrap(), Vec::<PathStep>::new());
        assert_eq!(parent(&[]), Err(PathError::NoParent));
    }

    #[test]
    fn test_get_scalar_root() {
        assert_eq!(get(&json!(123), "$"), Some(&json!(123)));
        assert_eq!(get_at(&json!("foo"), &[]), Some(&json!("foo")));
    }

    #[test]
    fn test_get_object_key() {
        let doc = json!({"foo": "bar"});
        assert_eq!(get(&doc, "$.foo"), Some(&json!("bar")));
        assert_eq!(get(&doc, "$.missing"), None);
    }

    #[test]
    fn test_get_array_element() {
        let doc = json!([1, 2, 3]);
        assert_eq!(get(&doc, "$[0]"), Some(&json!(1)));
        assert_eq!(get(&doc, "$[2]"), Some(&json!(3)));
        assert_eq!(get(&doc, "$[3]"), None);
    }

    #[test]
    fn test_get_wrong_container_kind() {
        let doc = json!({"a": [1, 2], "o": {"0": "zero"}});
        assert_eq!(get(&doc, "$.a.length"), None);
        assert_eq!(get(&doc, "$.o[0]"), None);
        assert_eq!(get(&doc, "$.o.0"), Some(&json!("zero")));
        assert_eq!(get(&doc, "$.a[0].x"), None);
    }

    #[test]
    fn test_get_null_value_is_present() {
        let doc = json!({"a": null});
        assert!(has(&doc, "$.a"));
        assert_eq!(get(&doc, "$.a"), Some(&Value::Null));
    }

    #[test]
    fn test_get_malformed_path() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, "$.a["), None);
        assert!(!has(&doc, "$[x]"));
    }

    #[test]
    fn test_get_mut() {
        let mut doc = json!({"a": {"b": [1, 2]}});
        *get_mut(&mut doc, &[key("a"), key("b"), PathStep::Index(1)]).unwrap() = json!(20);
        assert_eq!(doc, json!({"a": {"b": [1, 20]}}));
        assert!(get_mut(&mut doc, &[key("z")]).is_none());
    }

    #[test]
    fn test_split_index() {
        let path = vec![key("a"), PathStep::Index(4)];
        assert_eq!(split_index(&path), Some((&path[..1], 4)));
        assert_eq!(split_index(&[key("a")]), None);
        assert_eq!(split_index(&[]), None);
    }
}
