//! Change records produced by the diff engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use dialog_diff_path::ROOT;

// ── Change ────────────────────────────────────────────────────────────────

/// Kind of a single [`Change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Add,
    Delete,
    Update,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Add => "add",
            ChangeKind::Delete => "delete",
            ChangeKind::Update => "update",
        }
    }
}

/// One path-addressed difference between two documents.
///
/// `path` is rendered with the `$` root for engine results and relative to
/// the array (`[n]`) for standalone list diffs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Change {
    /// A value present only in the current document.
    Add { path: String, value: Value },
    /// A value present only in the previous document.
    Delete { path: String, value: Value },
    /// A value present in both documents that changed.
    Update {
        path: String,
        value: Value,
        #[serde(rename = "preValue")]
        pre_value: Value,
    },
}

impl Change {
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Change::Add {
            path: path.into(),
            value,
        }
    }

    pub fn delete(path: impl Into<String>, value: Value) -> Self {
        Change::Delete {
            path: path.into(),
            value,
        }
    }

    pub fn update(path: impl Into<String>, value: Value, pre_value: Value) -> Self {
        Change::Update {
            path: path.into(),
            value,
            pre_value,
        }
    }

    pub fn kind(&self) -> ChangeKind {
        match self {
            Change::Add { .. } => ChangeKind::Add,
            Change::Delete { .. } => ChangeKind::Delete,
            Change::Update { .. } => ChangeKind::Update,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Change::Add { path, .. } | Change::Delete { path, .. } | Change::Update { path, .. } => {
                path
            }
        }
    }

    /// The added or deleted value, or the new value of an update.
    pub fn value(&self) -> &Value {
        match self {
            Change::Add { value, .. }
            | Change::Delete { value, .. }
            | Change::Update { value, .. } => value,
        }
    }

    /// The previous value of an update.
    pub fn pre_value(&self) -> Option<&Value> {
        match self {
            Change::Update { pre_value, .. } => Some(pre_value),
            _ => None,
        }
    }

    /// The change describing the reverse edit.
    pub fn inverted(self) -> Self {
        match self {
            Change::Add { path, value } => Change::Delete { path, value },
            Change::Delete { path, value } => Change::Add { path, value },
            Change::Update {
                path,
                value,
                pre_value,
            } => Change::Update {
                path,
                value: pre_value,
                pre_value: value,
            },
        }
    }

    /// Re-root the change path under `prefix`.
    ///
    /// A leading `$` on the current path is dropped first, so both absolute
    /// (`$.a`) and relative (`[0].a`) paths can be moved.
    pub(crate) fn rebased(mut self, prefix: &str) -> Self {
        let path = match &mut self {
            Change::Add { path, .. } | Change::Delete { path, .. } | Change::Update { path, .. } => {
                path
            }
        };
        if path.starts_with(ROOT) {
            path.replace_range(..ROOT.len(), "");
        }
        path.insert_str(0, prefix);
        self
    }
}

// ── ChangeSet ─────────────────────────────────────────────────────────────

/// The `{adds, deletes, updates}` result of a diff.
///
/// Entries in each list are in depth-first traversal order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeSet {
    pub adds: Vec<Change>,
    pub deletes: Vec<Change>,
    pub updates: Vec<Change>,
}

impl ChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.adds.is_empty() && self.deletes.is_empty() && self.updates.is_empty()
    }

    /// Total number of changes.
    pub fn len(&self) -> usize {
        self.adds.len() + self.deletes.len() + self.updates.len()
    }

    /// Iterate adds, then deletes, then updates.
    pub fn iter(&self) -> impl Iterator<Item = &Change> {
        self.adds.iter().chain(&self.deletes).chain(&self.updates)
    }

    /// Every touched path, in iteration order.
    pub fn paths(&self) -> Vec<&str> {
        self.iter().map(Change::path).collect()
    }

    /// The change set of the reverse edit: adds and deletes swap roles and
    /// updates swap their values.
    pub fn invert(self) -> Self {
        ChangeSet {
            adds: self.deletes.into_iter().map(Change::inverted).collect(),
            deletes: self.adds.into_iter().map(Change::inverted).collect(),
            updates: self.updates.into_iter().map(Change::inverted).collect(),
        }
    }

    /// Append every change of `other`, keeping each list's order.
    pub fn extend(&mut self, other: ChangeSet) {
        self.adds.extend(other.adds);
        self.deletes.extend(other.deletes);
        self.updates.extend(other.updates);
    }
}
