//! # Ledger Subcommands
//!
//! One subcommand per registry operation. Handlers write their result to
//! the supplied writer (stdout in the binary) and return an exit code:
//!
//! - `0` on success,
//! - `1` when the registry reports `ASSET_NOT_FOUND` or `ASSET_ALREADY_EXISTS`.
//!
//! Any other failure is returned as an error and becomes exit code `2` in
//! `main`. Assets are printed as their canonical JSON text.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;

use assetreg_core::{Asset, CanonicalBytes};
use assetreg_registry::{AssetRegistry, RegistryError};
use assetreg_store::StateStore;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    /// Create the bootstrap assets asset1..asset6.
    Init,

    /// Create a new asset.
    Create {
        #[arg(value_name = "ID")]
        asset_id: String,
        owner: String,
        /// Payload format tag (file extension or MIME hint).
        type_file: String,
        /// Base64 payload; empty when omitted.
        #[arg(default_value = "")]
        base64_file: String,
    },

    /// Print an asset.
    Read {
        #[arg(value_name = "ID")]
        asset_id: String,
    },

    /// Replace every attribute of an existing asset.
    Update {
        #[arg(value_name = "ID")]
        asset_id: String,
        owner: String,
        type_file: String,
        #[arg(default_value = "")]
        base64_file: String,
    },

    /// Delete an asset.
    Delete {
        #[arg(value_name = "ID")]
        asset_id: String,
    },

    /// Hand an asset to a new owner; prints the previous owner.
    Transfer {
        #[arg(value_name = "ID")]
        asset_id: String,
        new_owner: String,
    },

    /// Print `true` or `false`.
    Exists {
        #[arg(value_name = "ID")]
        asset_id: String,
    },

    /// Print every asset as one canonical JSON array, in key order.
    List {
        /// Inclusive lower key bound.
        #[arg(long, default_value = "")]
        start: String,
        /// Exclusive upper key bound.
        #[arg(long, default_value = "")]
        end: String,
    },

    /// Print the SHA-256 digest of an asset's canonical form.
    Digest {
        #[arg(value_name = "ID")]
        asset_id: String,
    },
}

/// Execute one ledger subcommand against `store`.
pub fn run_ledger<S, W>(command: &LedgerCommand, store: &mut S, out: &mut W) -> Result<u8>
where
    S: StateStore + ?Sized,
    W: Write,
{
    let registry = AssetRegistry::new();
    match execute(&registry, command, store, out) {
        Ok(()) => Ok(0),
        Err(CommandError::Registry(e)) if e.kind().is_some() => {
            let code = e.kind().map(|k| k.code()).unwrap_or_default();
            writeln!(out, "ERROR {code}: {e}")?;
            Ok(1)
        }
        Err(CommandError::Registry(e)) => Err(e).context("registry operation failed"),
        Err(CommandError::Output(e)) => Err(e).context("failed to write output"),
    }
}

enum CommandError {
    Registry(RegistryError),
    Output(std::io::Error),
}

impl From<RegistryError> for CommandError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}

impl From<std::io::Error> for CommandError {
    fn from(e: std::io::Error) -> Self {
        Self::Output(e)
    }
}

fn execute<S, W>(
    registry: &AssetRegistry,
    command: &LedgerCommand,
    store: &mut S,
    out: &mut W,
) -> Result<(), CommandError>
where
    S: StateStore + ?Sized,
    W: Write,
{
    match command {
        LedgerCommand::Init => {
            registry.init_ledger(store)?;
            writeln!(out, "OK: ledger initialized")?;
        }
        LedgerCommand::Create {
            asset_id,
            owner,
            type_file,
            base64_file,
        } => {
            let asset = registry.create_asset(store, asset_id, owner, type_file, base64_file)?;
            print_asset(out, &asset)?;
        }
        LedgerCommand::Read { asset_id } => {
            let asset = registry.read_asset(&*store, asset_id)?;
            print_asset(out, &asset)?;
        }
        LedgerCommand::Update {
            asset_id,
            owner,
            type_file,
            base64_file,
        } => {
            let asset = registry.update_asset(store, asset_id, owner, type_file, base64_file)?;
            print_asset(out, &asset)?;
        }
        LedgerCommand::Delete { asset_id } => {
            registry.delete_asset(store, asset_id)?;
            writeln!(out, "OK: deleted {asset_id}")?;
        }
        LedgerCommand::Transfer {
            asset_id,
            new_owner,
        } => {
            let previous = registry.transfer_asset(store, asset_id, new_owner)?;
            writeln!(out, "{previous}")?;
        }
        LedgerCommand::Exists { asset_id } => {
            let exists = registry.asset_exists(&*store, asset_id)?;
            writeln!(out, "{exists}")?;
        }
        LedgerCommand::List { start, end } => {
            let assets = registry.get_assets_by_range(&*store, start, end)?;
            let canonical = CanonicalBytes::new(&assets).map_err(RegistryError::from)?;
            writeln!(out, "{canonical}")?;
        }
        LedgerCommand::Digest { asset_id } => {
            let asset = registry.read_asset(&*store, asset_id)?;
            let digest = asset.digest().map_err(RegistryError::from)?;
            writeln!(out, "{digest}")?;
        }
    }
    Ok(())
}

fn print_asset<W: Write>(out: &mut W, asset: &Asset) -> Result<(), CommandError> {
    let canonical = asset.to_canonical().map_err(RegistryError::from)?;
    writeln!(out, "{canonical}")?;
    Ok(())
}
