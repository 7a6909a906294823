//! Array differ.
//!
//! Only elements without a deep-equal counterpart anywhere on the other side
//! count as changed, so a reorder of identical elements is not a change and
//! a value present on both sides is never reported, however often it occurs.
//! The changed elements are aligned by index: an old and a new one at the
//! same position become a single update of the whole element there,
//! everything else is an add at its new index or a delete at its old index.
//!
//! The alignment is positional and makes no attempt at a minimal edit
//! script. `[1, 2, 3]` against `[0, 1, 22, 3]` reports adds at `[0]` and
//! `[2]` plus a delete at `[1]`. Prose descriptions of this heuristic have
//! given the same input as "one delete and one update"; the rules above
//! produce the two adds and the delete, and that is what is reported.

use serde_json::Value;

use dialog_diff_path::PathStep;
use dialog_diff_util::deep_equal;

use crate::change::{Change, ChangeSet};
use crate::engine::{into_deletes, Pass};

/// Diff two arrays. Paths are relative to the array (`[2]`).
///
/// # Example
///
/// ```
/// use dialog_diff::{list_diff, Change};
/// use serde_json::json;
///
/// let prev = [json!(1), json!(2), json!(3)];
/// let curr = [json!(1), json!(2), json!(4)];
/// let changes = list_diff(&prev, &curr);
/// assert_eq!(changes.updates, vec![Change::update("[2]", json!(4), json!(3))]);
/// ```
pub fn list_diff(prev: &[Value], curr: &[Value]) -> ChangeSet {
    ChangeSet {
        adds: list_pass(prev, curr, Pass::Adds),
        deletes: into_deletes(list_pass(curr, prev, Pass::Adds)),
        updates: list_pass(prev, curr, Pass::Updates),
    }
}

/// The changes of one pass over a pair of arrays, in index order.
pub(crate) fn list_pass(prev: &[Value], curr: &[Value], pass: Pass) -> Vec<Change> {
    let changed_prev = changed(prev, curr);
    let changed_curr = changed(curr, prev);
    let mut changes = Vec::new();
    for (idx, after) in curr.iter().enumerate() {
        if !changed_curr[idx] {
            continue;
        }
        let slot = PathStep::Index(idx).to_string();
        match (pass, prev.get(idx)) {
            (Pass::Updates, Some(before)) if changed_prev[idx] => {
                changes.push(Change::update(slot, after.clone(), before.clone()));
            }
            (Pass::Adds, _) if !changed_prev.get(idx).copied().unwrap_or(false) => {
                changes.push(Change::add(slot, after.clone()));
            }
            _ => {}
        }
    }
    changes
}

/// Flags the elements of `list` with no deep-equal element in `other`.
fn changed(list: &[Value], other: &[Value]) -> Vec<bool> {
    list.iter()
        .map(|item| !other.iter().any(|candidate| deep_equal(item, candidate)))
        .collect()
}
