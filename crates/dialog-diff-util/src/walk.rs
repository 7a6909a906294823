//! Recursive visitor over JSON values.
//!
//! The visitor is called for a node before any of its children and returns
//! `true` to stop descent below that node. Arrays are visited in index order
//! and objects in member enumeration order; scalars have no children.

use dialog_diff_path::{Path, PathStep};
use serde_json::Value;

/// Walk `value` from the root, calling `visit(path, node)` for every node
/// reached.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use dialog_diff_path::format_path;
/// use dialog_diff_util::walk;
///
/// let doc = json!({"a": [1, {"b": 2}], "c": 3});
/// let mut seen = Vec::new();
/// walk(&doc, &mut |path, _| {
///     seen.push(format_path(path));
///     false
/// });
/// assert_eq!(seen, ["$", "$.a", "$.a[0]", "$.a[1]", "$.a[1].b", "$.c"]);
/// ```
pub fn walk<F>(value: &Value, visit: &mut F)
where
    F: FnMut(&[PathStep], &Value) -> bool,
{
    let mut path = Path::new();
    walk_from(&mut path, value, visit);
}

/// Walk `value` as if it were located at `path`.
///
/// `path` is used as a scratch stack and is restored before returning.
pub fn walk_from<F>(path: &mut Path, value: &Value, visit: &mut F)
where
    F: FnMut(&[PathStep], &Value) -> bool,
{
    if visit(path.as_slice(), value) {
        return;
    }
    match value {
        Value::Array(arr) => {
            for (idx, item) in arr.iter().enumerate() {
                path.push(PathStep::Index(idx));
                walk_from(path, item, visit);
                path.pop();
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                path.push(PathStep::Key(key.clone()));
                walk_from(path, item, visit);
                path.pop();
            }
        }
        _ => {}
    }
}
