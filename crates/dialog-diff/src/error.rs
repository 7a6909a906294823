//! Error types for the diff crate.

use dialog_diff_path::PathError;
use thiserror::Error;

/// Errors raised by the document mutators.
///
/// Diffing itself is total; only malformed edits fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// An insert edit whose path does not end in `[n]`.
    #[error("insert path {path} does not end in an array index")]
    MissingIndex { path: String },

    /// An insert edit whose target container is missing or not an array.
    #[error("insert target {path} is not an array")]
    NotAnArray { path: String },

    /// A set edit that steps into an array with an object key.
    #[error("cannot write {path}: key step into an array")]
    InvalidTarget { path: String },

    /// A set edit whose index lies too far past the end of its array.
    #[error("cannot write {path}: index too far past the end of an array of length {len}")]
    IndexOutOfRange { path: String, len: usize },

    /// A path string that does not parse.
    #[error("invalid path: {0}")]
    Path(#[from] PathError),
}

/// Convenience alias for mutator results.
pub type DiffResult<T> = Result<T, DiffError>;
