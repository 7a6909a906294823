//! Diff policy for dialog documents.
//!
//! Dialog nodes are objects tagged with a discriminator field (`$kind` by
//! default). A typed node is the unit of change: when anything inside it
//! differs, the node is reported once at its own path instead of once per
//! modified field. The walk stops at every such node, so a field added to
//! or removed from it is folded into that one update as well.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use dialog_diff_path::{get_at, PathStep};
use dialog_diff_util::{deep_equal, same_shape};

use crate::change::ChangeSet;
use crate::engine::diff_with;
use crate::policy::{AddDiffer, Comparator, Differ, Stopper, Verdict};

/// Default discriminator field of dialog nodes.
pub const DEFAULT_DISCRIMINATOR: &str = "$kind";

/// Comparison policy for typed dialog nodes.
///
/// Loadable from configuration; missing fields take their defaults:
///
/// ```
/// use dialog_diff::DialogPolicy;
///
/// let policy: DialogPolicy = serde_json::from_str(r#"{"skip_kinds": ["Comment"]}"#).unwrap();
/// assert_eq!(policy.discriminator, "$kind");
/// assert!(policy.skip_kinds.contains("Comment"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogPolicy {
    /// Field holding a node's type tag.
    pub discriminator: String,
    /// Node kinds never reported as updated. Their children are still
    /// compared.
    pub skip_kinds: BTreeSet<String>,
}

impl Default for DialogPolicy {
    fn default() -> Self {
        Self {
            discriminator: DEFAULT_DISCRIMINATOR.to_string(),
            skip_kinds: BTreeSet::new(),
        }
    }
}

impl DialogPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_discriminator(mut self, discriminator: impl Into<String>) -> Self {
        self.discriminator = discriminator.into();
        self
    }

    pub fn skip_kind(mut self, kind: impl Into<String>) -> Self {
        self.skip_kinds.insert(kind.into());
        self
    }

    pub fn with_skip_kinds<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_kinds.extend(kinds.into_iter().map(Into::into));
        self
    }

    /// The discriminator value of `node`, if it is a typed object.
    pub fn kind_of<'a>(&self, node: &'a Value) -> Option<&'a Value> {
        node.as_object()?.get(&self.discriminator)
    }

    /// Returns `true` if `kind` names a skipped node type.
    pub fn is_skipped(&self, kind: &Value) -> bool {
        kind.as_str().is_some_and(|k| self.skip_kinds.contains(k))
    }

    /// The policy bundled with the default add differ.
    pub fn comparator(&self) -> Comparator<'_> {
        Comparator::new(&AddDiffer, self, self)
    }

    /// Both sides are typed nodes of kinds that are not skipped.
    fn both_units(&self, prev: &Value, curr: &Value) -> bool {
        match (self.kind_of(prev), self.kind_of(curr)) {
            (Some(before), Some(after)) => !self.is_skipped(before) && !self.is_skipped(after),
            _ => false,
        }
    }

    fn node_changed(&self, prev: &Value, curr: &Value) -> bool {
        self.both_units(prev, curr) && !deep_equal(prev, curr)
    }
}

impl Stopper for DialogPolicy {
    fn should_stop(&self, prev: &Value, curr: &Value, path: &[PathStep]) -> bool {
        match (get_at(prev, path), get_at(curr, path)) {
            (Some(p), Some(c)) => !same_shape(p, c) || self.both_units(p, c),
            _ => true,
        }
    }
}

impl Differ for DialogPolicy {
    fn verdict(
        &self,
        prev: &Value,
        curr: &Value,
        path: &[PathStep],
        stopper: &dyn Stopper,
    ) -> Verdict {
        let is_change = match (get_at(prev, path), get_at(curr, path)) {
            (Some(p), Some(c)) => self.node_changed(p, c),
            _ => false,
        };
        Verdict {
            is_change,
            is_stop: is_change || stopper.should_stop(prev, curr, path),
        }
    }
}

/// Diff two dialog documents.
///
/// # Example
///
/// ```
/// use dialog_diff::{diff_dialogs, DialogPolicy};
/// use serde_json::json;
///
/// let prev = json!({"triggers": [{"$kind": "OnBegin", "actions": [{"text": "hi"}]}]});
/// let curr = json!({"triggers": [{"$kind": "OnBegin", "actions": [{"text": "hello"}]}]});
/// let changes = diff_dialogs(&prev, &curr, &DialogPolicy::default());
/// assert_eq!(changes.paths(), ["$.triggers[0]"]);
/// ```
pub fn diff_dialogs(prev: &Value, curr: &Value, policy: &DialogPolicy) -> ChangeSet {
    diff_with(prev, curr, &policy.comparator())
}
