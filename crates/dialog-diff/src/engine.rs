//! Structural diff engine.
//!
//! Walks the current document from `$` and classifies every visited path
//! with the comparator's differs. Where both documents hold an array at the
//! same path, the array is handed to the list differ, which compares its
//! elements whole, and the results are re-rooted at that path.
//!
//! Deletes are the adds of the reversed comparison: `diff_deletes(a, b)` is
//! `diff_adds(b, a)` with every entry re-tagged.

use serde_json::Value;
use tracing::{debug, trace};

use dialog_diff_path::{format_path, get_at, PathStep};
use dialog_diff_util::walk;

use crate::change::{Change, ChangeSet};
use crate::list;
use crate::policy::Comparator;

/// Which differ a walk consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pass {
    Adds,
    Updates,
}

/// Diff two documents with the default policy.
///
/// # Example
///
/// ```
/// use dialog_diff::diff;
/// use serde_json::json;
///
/// let changes = diff(&json!({"a": 1, "b": [1, 2]}), &json!({"a": 2, "b": [1, 2, 3]}));
/// assert_eq!(changes.updates[0].path(), "$.a");
/// assert_eq!(changes.adds[0].path(), "$.b[2]");
/// assert!(changes.deletes.is_empty());
/// ```
pub fn diff(prev: &Value, curr: &Value) -> ChangeSet {
    diff_with(prev, curr, &Comparator::default())
}

/// Diff two documents with a caller-supplied policy.
pub fn diff_with(prev: &Value, curr: &Value, cmp: &Comparator<'_>) -> ChangeSet {
    let changes = ChangeSet {
        adds: diff_adds(prev, curr, cmp),
        deletes: diff_deletes(prev, curr, cmp),
        updates: diff_updates(prev, curr, cmp),
    };
    debug!(
        adds = changes.adds.len(),
        deletes = changes.deletes.len(),
        updates = changes.updates.len(),
        "diff complete"
    );
    changes
}

/// Paths present in `curr` but not in `prev`.
pub fn diff_adds(prev: &Value, curr: &Value, cmp: &Comparator<'_>) -> Vec<Change> {
    run_pass(prev, curr, cmp, Pass::Adds)
}

/// Paths present in `prev` but not in `curr`.
pub fn diff_deletes(prev: &Value, curr: &Value, cmp: &Comparator<'_>) -> Vec<Change> {
    into_deletes(run_pass(curr, prev, cmp, Pass::Adds))
}

/// Paths present on both sides whose values differ.
pub fn diff_updates(prev: &Value, curr: &Value, cmp: &Comparator<'_>) -> Vec<Change> {
    run_pass(prev, curr, cmp, Pass::Updates)
}

pub(crate) fn into_deletes(adds: Vec<Change>) -> Vec<Change> {
    adds.into_iter().map(Change::inverted).collect()
}

fn run_pass(prev: &Value, curr: &Value, cmp: &Comparator<'_>, pass: Pass) -> Vec<Change> {
    let differ = match pass {
        Pass::Adds => cmp.add_differ,
        Pass::Updates => cmp.update_differ,
    };
    let mut changes = Vec::new();
    walk(curr, &mut |path, node| {
        if let (Some(Value::Array(before)), Value::Array(after)) = (get_at(prev, path), node) {
            let prefix = format_path(path);
            trace!(path = %prefix, ?pass, "delegating to list differ");
            changes.extend(
                list::list_pass(before, after, pass)
                    .into_iter()
                    .map(|change| change.rebased(&prefix)),
            );
            return true;
        }
        let verdict = differ.verdict(prev, curr, path, cmp.stopper);
        if verdict.is_change {
            changes.push(record(pass, prev, path, node));
        }
        verdict.is_stop
    });
    changes
}

fn record(pass: Pass, prev: &Value, path: &[PathStep], node: &Value) -> Change {
    let at = format_path(path);
    match pass {
        Pass::Adds => Change::add(at, node.clone()),
        Pass::Updates => {
            let pre_value = get_at(prev, path).cloned().unwrap_or(Value::Null);
            Change::update(at, node.clone(), pre_value)
        }
    }
}
