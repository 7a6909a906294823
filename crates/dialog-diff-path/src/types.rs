//! Type definitions for document paths.

use std::fmt;

/// A step in a document path.
///
/// Either a key into an object or an index into an array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Object key: `.name` or `['some key']`
    Key(String),
    /// Array index: `[0]`
    Index(usize),
}

/// A document path as an ordered list of steps. The empty path is the root `$`.
pub type Path = Vec<PathStep>;

impl PathStep {
    /// Returns the key if this step addresses an object member.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathStep::Key(key) => Some(key),
            PathStep::Index(_) => None,
        }
    }

    /// Returns the index if this step addresses an array element.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathStep::Index(idx) => Some(*idx),
            PathStep::Key(_) => None,
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, PathStep::Index(_))
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(idx: usize) -> Self {
        PathStep::Index(idx)
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => {
                if is_plain_key(key) {
                    write!(f, ".{key}")
                } else {
                    write!(f, "['{}']", escape_key(key))
                }
            }
            PathStep::Index(idx) => write!(f, "[{idx}]"),
        }
    }
}

/// Whether a key can be rendered in dot form without quoting.
///
/// Dialog documents carry keys such as `$kind` and `$designer`, so `$` and
/// other punctuation are allowed; only the characters that would make the
/// rendered path ambiguous force the bracket form.
pub fn is_plain_key(key: &str) -> bool {
    !key.is_empty()
        && !key
            .chars()
            .any(|c| matches!(c, '.' | '[' | ']' | '\'' | '\\') || c.is_whitespace())
}

/// Escapes a key for the single-quoted bracket form.
///
/// # Example
///
/// ```
/// use dialog_diff_path::escape_key;
///
/// assert_eq!(escape_key("it's"), "it\\'s");
/// assert_eq!(escape_key("a\\b"), "a\\\\b");
/// ```
pub fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for ch in key.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(ch),
        }
    }
    out
}
