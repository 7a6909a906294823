use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "dialog-diff",
    about = "Structural diff and patch for dialog documents",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log diff internals to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the changes between two documents
    Diff(DiffArgs),
    /// Write values at paths
    Set(EditArgs),
    /// Insert values into arrays
    Insert(EditArgs),
    /// Print the value at a path
    Get(GetArgs),
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Previous version of the document
    pub prev: PathBuf,
    /// Current version of the document
    pub curr: PathBuf,
    /// Compare typed dialog nodes as units
    #[arg(long)]
    pub dialog: bool,
    /// Dialog policy file (TOML or JSON); implies --dialog
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Document to edit
    pub doc: PathBuf,
    /// JSON array of `{"path": ..., "value": ...}` edits
    pub edits: PathBuf,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Document to read
    pub doc: PathBuf,
    /// Path such as `$.triggers[0].actions`
    pub path: String,
}
