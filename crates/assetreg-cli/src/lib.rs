//! # assetreg-cli — Asset Registry Command-Line Interface
//!
//! Drives the registry against a JSON state file on disk. Each invocation
//! opens the file, runs one operation and, if the operation mutated the
//! ledger, persists the new state before exiting.
//!
//! ## Subcommands
//!
//! - `init` — create the bootstrap assets
//! - `create`, `read`, `update`, `delete`, `transfer`, `exists` — single-asset operations
//! - `list` — every asset (optionally a key range) as a canonical JSON array
//! - `digest` — SHA-256 of an asset's canonical form
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to `assetreg-registry`; no ledger rules live here.

pub mod config;
pub mod ledger;

use std::path::Path;

use anyhow::{Context, Result};

use assetreg_store::JsonFileStore;

use crate::ledger::{run_ledger, LedgerCommand};

/// Open the state file at `state_file` and run `command` against it,
/// writing output to `out`.
pub fn run_on_state_file<W: std::io::Write>(
    command: &LedgerCommand,
    state_file: &Path,
    out: &mut W,
) -> Result<u8> {
    let mut store = JsonFileStore::open(state_file)
        .with_context(|| format!("failed to open state file: {}", state_file.display()))?;
    run_ledger(command, &mut store, out)
}
