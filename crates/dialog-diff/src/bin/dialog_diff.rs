//! `dialog-diff`: diff and patch dialog documents from the command line.
//!
//! Usage:
//!   dialog-diff diff <PREV> <CURR> [--dialog] [--config FILE] [--pretty]
//!   dialog-diff set <DOC> <EDITS>
//!   dialog-diff insert <DOC> <EDITS>
//!   dialog-diff get <DOC> <PATH>
//!
//! Results are written to stdout. `get` exits with status 1 when nothing is
//! at the path.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dialog_diff::cli::{self, Cli, Command};
use dialog_diff::DialogPolicy;

fn main() -> anyhow::Result<ExitCode> {
    let opts = Cli::parse();
    let default_filter = if opts.verbose { "dialog_diff=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let output = match opts.command {
        Command::Diff(args) => {
            let policy = match (&args.config, args.dialog) {
                (Some(path), _) => Some(cli::load_policy(path)?),
                (None, true) => Some(DialogPolicy::default()),
                (None, false) => None,
            };
            let prev = cli::read_file(&args.prev)?;
            let curr = cli::read_file(&args.curr)?;
            cli::diff_documents(&prev, &curr, policy.as_ref(), args.pretty)?
        }
        Command::Set(args) => cli::set(&cli::read_file(&args.doc)?, &cli::read_file(&args.edits)?)?,
        Command::Insert(args) => {
            cli::insert(&cli::read_file(&args.doc)?, &cli::read_file(&args.edits)?)?
        }
        Command::Get(args) => match cli::lookup(&cli::read_file(&args.doc)?, &args.path)? {
            Some(value) => value,
            None => {
                eprintln!("nothing at {}", args.path);
                return Ok(ExitCode::FAILURE);
            }
        },
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(ExitCode::SUCCESS)
}
