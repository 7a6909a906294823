//! Structural diff and patch for dialog documents.
//!
//! Two versions of a JSON document are compared and every difference is
//! classified as an add, a delete or an update at a `$`-rooted path. What
//! counts as a change, and how deep the comparison goes, is decided by a
//! pluggable [`Comparator`]; [`DialogPolicy`] is the one for dialog
//! definitions, where a node tagged with `$kind` is reported as a unit.
//!
//! # Example
//!
//! ```
//! use dialog_diff::{apply_set, diff, get, Edit};
//! use serde_json::json;
//!
//! let prev = json!({"greeting": "hi", "steps": ["a", "b"]});
//! let curr = json!({"greeting": "hello", "steps": ["a", "b", "c"]});
//!
//! let changes = diff(&prev, &curr);
//! assert_eq!(changes.updates[0].path(), "$.greeting");
//! assert_eq!(changes.adds[0].path(), "$.steps[2]");
//!
//! let add = &changes.adds[0];
//! let patched = apply_set(&prev, &[Edit::new(add.path(), add.value().clone())]).unwrap();
//! assert_eq!(get(&patched, "$.steps[2]"), Some(&json!("c")));
//! ```

pub mod change;
pub mod cli;
pub mod dialog;
pub mod engine;
pub mod error;
pub mod list;
pub mod mutate;
pub mod policy;

pub use change::{Change, ChangeKind, ChangeSet};
pub use dialog::{diff_dialogs, DialogPolicy, DEFAULT_DISCRIMINATOR};
pub use engine::{diff, diff_adds, diff_deletes, diff_updates, diff_with};
pub use error::{DiffError, DiffResult};
pub use list::list_diff;
pub use mutate::{apply_insert, apply_set, Edit, MAX_PADDING};
pub use policy::{AddDiffer, Comparator, DefaultStopper, Differ, Stopper, UpdateDiffer, Verdict};

pub use dialog_diff_path::{format_path, get, has, parse_path, Path, PathError, PathStep};
pub use dialog_diff_util::{deep_equal, walk};
