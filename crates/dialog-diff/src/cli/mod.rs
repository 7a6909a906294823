//! Core logic of the `dialog-diff` binary.
//!
//! Functions take document text and return the text to print, so the binary
//! only deals with files and exit codes:
//! - `diff`: changes between two documents, generic or dialog policy
//! - `set`: write values at paths
//! - `insert`: splice values into arrays
//! - `get`: look up a path

mod args;

pub use args::{Cli, Command, DiffArgs, EditArgs, GetArgs};

use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use dialog_diff_path::{get_at, parse_path, PathError};

use crate::dialog::{diff_dialogs, DialogPolicy};
use crate::engine::diff;
use crate::error::DiffError;
use crate::mutate::{apply_insert, apply_set, Edit};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid policy config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("unsupported config format {0:?}; expected .toml or .json")]
    UnknownFormat(String),
    #[error(transparent)]
    Diff(#[from] DiffError),
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Read a file to a string, keeping the path in the error.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}

// ── Config ────────────────────────────────────────────────────────────────

/// Load a [`DialogPolicy`] from a `.toml` or `.json` file.
pub fn load_policy(path: &Path) -> Result<DialogPolicy, CliError> {
    let text = read_file(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    let policy = parse_policy(&text, &ext)?;
    debug!(
        config = %path.display(),
        discriminator = %policy.discriminator,
        skipped = policy.skip_kinds.len(),
        "loaded dialog policy"
    );
    Ok(policy)
}

/// Parse policy text in the given format (`"toml"` or `"json"`).
pub fn parse_policy(text: &str, format: &str) -> Result<DialogPolicy, CliError> {
    match format {
        "toml" => Ok(toml::from_str(text)?),
        "json" => Ok(serde_json::from_str(text)?),
        other => Err(CliError::UnknownFormat(other.to_string())),
    }
}

// ── diff ──────────────────────────────────────────────────────────────────

/// Diff two JSON documents and render the change set as JSON.
///
/// With a policy the dialog comparison is used, otherwise the generic one.
pub fn diff_documents(
    prev_json: &str,
    curr_json: &str,
    policy: Option<&DialogPolicy>,
    pretty: bool,
) -> Result<String, CliError> {
    let prev: Value = serde_json::from_str(prev_json)?;
    let curr: Value = serde_json::from_str(curr_json)?;
    let changes = match policy {
        Some(policy) => diff_dialogs(&prev, &curr, policy),
        None => diff(&prev, &curr),
    };
    if pretty {
        Ok(serde_json::to_string_pretty(&changes)?)
    } else {
        Ok(serde_json::to_string(&changes)?)
    }
}

// ── set / insert ──────────────────────────────────────────────────────────

/// Apply set edits (a JSON array of `{path, value}`) to a document.
pub fn set(doc_json: &str, edits_json: &str) -> Result<String, CliError> {
    let (doc, edits) = parse_edits(doc_json, edits_json)?;
    Ok(serde_json::to_string_pretty(&apply_set(&doc, &edits)?)?)
}

/// Apply insert edits (a JSON array of `{path, value}`) to a document.
pub fn insert(doc_json: &str, edits_json: &str) -> Result<String, CliError> {
    let (doc, edits) = parse_edits(doc_json, edits_json)?;
    Ok(serde_json::to_string_pretty(&apply_insert(&doc, &edits)?)?)
}

fn parse_edits(doc_json: &str, edits_json: &str) -> Result<(Value, Vec<Edit>), CliError> {
    let doc = serde_json::from_str(doc_json)?;
    let edits = serde_json::from_str(edits_json)?;
    Ok((doc, edits))
}

// ── get ───────────────────────────────────────────────────────────────────

/// Look up a path in a document.
///
/// Returns `Ok(None)` when nothing is at the path; a malformed path is an
/// error.
pub fn lookup(doc_json: &str, path: &str) -> Result<Option<String>, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let steps = parse_path(path)?;
    get_at(&doc, &steps)
        .map(serde_json::to_string_pretty)
        .transpose()
        .map_err(CliError::from)
}
