//! Path-addressed document edits.
//!
//! Both mutators leave the input untouched and return an edited copy. Edits
//! are applied in order, each seeing the result of the previous one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use dialog_diff_path::{format_path, get_mut, parse_path, split_index, PathStep};
use dialog_diff_util::is_container;

use crate::error::{DiffError, DiffResult};

/// Most `null` slots a single set edit may pad an array with.
pub const MAX_PADDING: usize = 1 << 16;

/// A value to write at a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edit {
    pub path: String,
    pub value: Value,
}

impl Edit {
    pub fn new(path: impl Into<String>, value: Value) -> Self {
        Self {
            path: path.into(),
            value,
        }
    }
}

// ── set ───────────────────────────────────────────────────────────────────

/// Write each edit's value at its path, creating missing containers.
///
/// An intermediate that is missing or not a container becomes an array when
/// the next step is an index and an object otherwise. Writing past the end of
/// an array pads it with `null`, at most [`MAX_PADDING`] slots at a time. An
/// index step into an object uses the decimal key. `$` replaces the whole
/// document.
///
/// # Errors
///
/// [`DiffError::InvalidTarget`] for a key step into an array,
/// [`DiffError::IndexOutOfRange`] for an index too far past the end of its
/// array and [`DiffError::Path`] for a malformed path.
///
/// # Example
///
/// ```
/// use dialog_diff::{apply_set, Edit};
/// use serde_json::json;
///
/// let doc = json!({"a": 1});
/// let out = apply_set(&doc, &[Edit::new("$.b.list[1]", json!("x"))]).unwrap();
/// assert_eq!(out, json!({"a": 1, "b": {"list": [null, "x"]}}));
/// ```
pub fn apply_set(doc: &Value, edits: &[Edit]) -> DiffResult<Value> {
    let mut out = doc.clone();
    for edit in edits {
        trace!(path = %edit.path, "set");
        let path = parse_path(&edit.path)?;
        set_at(&mut out, &path, edit.value.clone())?;
    }
    Ok(out)
}

fn set_at(doc: &mut Value, path: &[PathStep], value: Value) -> DiffResult<()> {
    let mut current = doc;
    for (depth, step) in path.iter().enumerate() {
        current = slot(current, step, || format_path(&path[..=depth]))?;
    }
    *current = value;
    Ok(())
}

/// The child of `current` addressed by `step`, created if needed.
fn slot<'a>(
    current: &'a mut Value,
    step: &PathStep,
    at: impl Fn() -> String,
) -> DiffResult<&'a mut Value> {
    if !is_container(current) {
        *current = match step {
            PathStep::Index(_) => Value::Array(Vec::new()),
            PathStep::Key(_) => Value::Object(Map::new()),
        };
    }
    match (current, step) {
        (Value::Object(map), PathStep::Key(key)) => {
            Ok(map.entry(key.as_str()).or_insert(Value::Null))
        }
        (Value::Object(map), PathStep::Index(idx)) => {
            Ok(map.entry(idx.to_string()).or_insert(Value::Null))
        }
        (Value::Array(arr), PathStep::Index(idx)) => {
            let len = arr.len();
            if *idx >= len {
                let new_len = idx
                    .checked_add(1)
                    .filter(|_| idx - len <= MAX_PADDING)
                    .ok_or_else(|| DiffError::IndexOutOfRange { path: at(), len })?;
                arr.resize(new_len, Value::Null);
            }
            Ok(&mut arr[*idx])
        }
        _ => Err(DiffError::InvalidTarget { path: at() }),
    }
}

// ── insert ────────────────────────────────────────────────────────────────

/// Splice each edit's value into an array, shifting later elements.
///
/// The path names the new element's position, e.g. `$.list[0]` inserts at
/// the front of `list`. An index past the end appends.
///
/// # Errors
///
/// [`DiffError::MissingIndex`] when the path does not end in `[n]`,
/// [`DiffError::NotAnArray`] when the container is missing or not an array,
/// and [`DiffError::Path`] for a malformed path.
///
/// # Example
///
/// ```
/// use dialog_diff::{apply_insert, Edit};
/// use serde_json::json;
///
/// let doc = json!({"list": ["b", "c"]});
/// let out = apply_insert(&doc, &[Edit::new("$.list[0]", json!("a"))]).unwrap();
/// assert_eq!(out, json!({"list": ["a", "b", "c"]}));
/// ```
pub fn apply_insert(doc: &Value, edits: &[Edit]) -> DiffResult<Value> {
    let mut out = doc.clone();
    for edit in edits {
        trace!(path = %edit.path, "insert");
        let path = parse_path(&edit.path)?;
        let (container, idx) = split_index(&path).ok_or_else(|| DiffError::MissingIndex {
            path: edit.path.clone(),
        })?;
        match get_mut(&mut out, container) {
            Some(Value::Array(arr)) => {
                let at = idx.min(arr.len());
                arr.insert(at, edit.value.clone());
            }
            _ => {
                return Err(DiffError::NotAnArray {
                    path: format_path(container),
                })
            }
        }
    }
    Ok(out)
}
