//! Pluggable comparison policy.
//!
//! A policy is a pair of pure predicates consulted at every visited path:
//!
//! - a [`Stopper`] decides whether recursion stops at a path;
//! - a [`Differ`] decides whether the value at a path changed, and whether
//!   the walk should descend further.
//!
//! Both receive the two whole documents plus the path, so a policy may look
//! at ancestors or siblings when it needs to. Closures with the matching
//! signature implement the traits, so ad-hoc policies need no new types.
//!
//! The delete direction of a diff reuses add detection with the documents
//! swapped. A custom add differ must therefore treat its first two arguments
//! symmetrically ("absent here, present there"), or deletes are misclassified.

use std::fmt;

use dialog_diff_path::{get_at, has_at, PathStep};
use dialog_diff_util::{deep_equal, same_shape};
use serde_json::Value;

/// Outcome of a [`Differ`] at one path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verdict {
    /// Record a change at this path.
    pub is_change: bool,
    /// Do not descend below this path.
    pub is_stop: bool,
}

/// Decides whether recursion stops at `path`.
pub trait Stopper {
    fn should_stop(&self, prev: &Value, curr: &Value, path: &[PathStep]) -> bool;
}

/// Classifies the value at `path` of `curr` against `prev`.
///
/// Used with the documents swapped to detect deletes; see the module docs.
pub trait Differ {
    fn verdict(
        &self,
        prev: &Value,
        curr: &Value,
        path: &[PathStep],
        stopper: &dyn Stopper,
    ) -> Verdict;
}

impl<F> Stopper for F
where
    F: Fn(&Value, &Value, &[PathStep]) -> bool,
{
    fn should_stop(&self, prev: &Value, curr: &Value, path: &[PathStep]) -> bool {
        self(prev, curr, path)
    }
}

impl<F> Differ for F
where
    F: Fn(&Value, &Value, &[PathStep], &dyn Stopper) -> Verdict,
{
    fn verdict(
        &self,
        prev: &Value,
        curr: &Value,
        path: &[PathStep],
        stopper: &dyn Stopper,
    ) -> Verdict {
        self(prev, curr, path, stopper)
    }
}

// ── Defaults ──────────────────────────────────────────────────────────────

/// Stops unless both sides are containers of the same shape.
///
/// A missing side, a scalar, `null`, or an array facing an object are all
/// atomic: the value is replaced as a whole, never merged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStopper;

impl Stopper for DefaultStopper {
    fn should_stop(&self, prev: &Value, curr: &Value, path: &[PathStep]) -> bool {
        match (get_at(prev, path), get_at(curr, path)) {
            (Some(p), Some(c)) => !same_shape(p, c),
            _ => true,
        }
    }
}

/// Reports a path absent in `prev` and present in `curr`, once, without
/// descending into the new subtree.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddDiffer;

impl Differ for AddDiffer {
    fn verdict(
        &self,
        prev: &Value,
        curr: &Value,
        path: &[PathStep],
        stopper: &dyn Stopper,
    ) -> Verdict {
        let is_change = !has_at(prev, path) && has_at(curr, path);
        Verdict {
            is_change,
            is_stop: is_change || stopper.should_stop(prev, curr, path),
        }
    }
}

/// Reports a value present on both sides that differs, at the first path
/// where the stopper halts recursion.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateDiffer;

impl Differ for UpdateDiffer {
    fn verdict(
        &self,
        prev: &Value,
        curr: &Value,
        path: &[PathStep],
        stopper: &dyn Stopper,
    ) -> Verdict {
        let is_stop = stopper.should_stop(prev, curr, path);
        let is_change = is_stop
            && match (get_at(prev, path), get_at(curr, path)) {
                (Some(p), Some(c)) => !deep_equal(p, c),
                _ => false,
            };
        Verdict { is_change, is_stop }
    }
}

// ── Comparator ────────────────────────────────────────────────────────────

/// A complete policy: the differs used for the add and update passes and the
/// shared stopper.
#[derive(Clone, Copy)]
pub struct Comparator<'a> {
    pub add_differ: &'a dyn Differ,
    pub update_differ: &'a dyn Differ,
    pub stopper: &'a dyn Stopper,
}

impl<'a> Comparator<'a> {
    pub fn new(
        add_differ: &'a dyn Differ,
        update_differ: &'a dyn Differ,
        stopper: &'a dyn Stopper,
    ) -> Self {
        Self {
            add_differ,
            update_differ,
            stopper,
        }
    }

    pub fn with_add_differ(mut self, differ: &'a dyn Differ) -> Self {
        self.add_differ = differ;
        self
    }

    pub fn with_update_differ(mut self, differ: &'a dyn Differ) -> Self {
        self.update_differ = differ;
        self
    }

    pub fn with_stopper(mut self, stopper: &'a dyn Stopper) -> Self {
        self.stopper = stopper;
        self
    }
}

impl Default for Comparator<'static> {
    fn default() -> Self {
        Comparator::new(&AddDiffer, &UpdateDiffer, &DefaultStopper)
    }
}

impl fmt::Debug for Comparator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialog_diff_path::parse_path;
    use serde_json::json;

    fn at(path: &str) -> Vec<PathStep> {
        parse_path(path).unwrap()
    }

    #[test]
    fn test_default_stopper() {
        let prev = json!({"o": {}, "a": [], "s": 1, "n": null, "mix": []});
        let curr = json!({"o": {"x": 1}, "a": [1], "s": 1, "n": null, "mix": {}});
        assert!(!DefaultStopper.should_stop(&prev, &curr, &[]));
        assert!(!DefaultStopper.should_stop(&prev, &curr, &at("$.o")));
        assert!(!DefaultStopper.should_stop(&prev, &curr, &at("$.a")));
        assert!(DefaultStopper.should_stop(&prev, &curr, &at("$.s")));
        assert!(DefaultStopper.should_stop(&prev, &curr, &at("$.n")));
        assert!(DefaultStopper.should_stop(&prev, &curr, &at("$.mix")));
        assert!(DefaultStopper.should_stop(&prev, &curr, &at("$.missing")));
    }

    #[test]
    fn test_add_differ() {
        let prev = json!({"a": 1});
        let curr = json!({"a": 1, "b": {"c": 2}});
        assert_eq!(
            AddDiffer.verdict(&prev, &curr, &at("$.b"), &DefaultStopper),
            Verdict { is_change: true, is_stop: true }
        );
        assert_eq!(
            AddDiffer.verdict(&prev, &curr, &at("$.a"), &DefaultStopper),
            Verdict { is_change: false, is_stop: true }
        );
        assert_eq!(
            AddDiffer.verdict(&prev, &curr, &[], &DefaultStopper),
            Verdict { is_change: false, is_stop: false }
        );
    }

    #[test]
    fn test_update_differ() {
        let prev = json!({"a": 1, "b": "x", "o": {"k": 1}});
        let curr = json!({"a": 1, "b": "y", "o": {"k": 2}});
        assert_eq!(
            UpdateDiffer.verdict(&prev, &curr, &at("$.b"), &DefaultStopper),
            Verdict { is_change: true, is_stop: true }
        );
        assert_eq!(
            UpdateDiffer.verdict(&prev, &curr, &at("$.a"), &DefaultStopper),
            Verdict { is_change: false, is_stop: true }
        );
        // Containers are never reported themselves; recursion continues.
        assert_eq!(
            UpdateDiffer.verdict(&prev, &curr, &at("$.o"), &DefaultStopper),
            Verdict { is_change: false, is_stop: false }
        );
    }

    #[test]
    fn test_update_differ_ignores_one_sided_paths() {
        let prev = json!({});
        let curr = json!({"new": 1});
        assert!(!UpdateDiffer.verdict(&prev, &curr, &at("$.new"), &DefaultStopper).is_change);
    }

    #[test]
    fn test_closures_are_policies() {
        let never_stop = |_: &Value, _: &Value, _: &[PathStep]| false;
        let always_change =
            |_: &Value, _: &Value, _: &[PathStep], _: &dyn Stopper| Verdict { is_change: true, is_stop: true };
        let cmp = Comparator::default()
            .with_stopper(&never_stop)
            .with_update_differ(&always_change);
        let doc = json!(1);
        assert!(!cmp.stopper.should_stop(&doc, &doc, &[]));
        assert!(cmp.update_differ.verdict(&doc, &doc, &[], cmp.stopper).is_change);
    }
}
