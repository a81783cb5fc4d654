//! # Asset Registry Operations
//!
//! Enforces the two registry invariants against a host-supplied store:
//!
//! 1. `create_asset` fails with `AlreadyExists` if the key is occupied.
//! 2. Every other key-addressed operation fails with `NotFound` if the key is
//!    absent.
//!
//! An absent key and a key mapped to an empty value are the same thing here:
//! some ledgers encode "no value" as an empty byte string.
//!
//! ## Concurrency
//!
//! The registry holds no state and takes no locks. `update_asset` and
//! `transfer_asset` are a read followed by a write; isolation between the two
//! is whatever the host store provides for the enclosing transaction.

use assetreg_core::{Asset, CanonicalBytes};
use assetreg_store::StateStore;

use crate::bootstrap::BOOTSTRAP_ASSETS;
use crate::error::RegistryError;

/// Stateless operation surface over a [`StateStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetRegistry;

impl AssetRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Create the bootstrap assets (`asset1`..`asset6`) in order.
    ///
    /// Stops at the first failure. Assets created before the failure are left
    /// in place; there is no rollback.
    pub fn init_ledger<S>(&self, store: &mut S) -> Result<(), RegistryError>
    where
        S: StateStore + ?Sized,
    {
        tracing::info!(count = BOOTSTRAP_ASSETS.len(), "initializing ledger");
        for (asset_id, owner, type_file, base64_file) in BOOTSTRAP_ASSETS {
            self.create_asset(store, asset_id, owner, type_file, base64_file)?;
        }
        tracing::info!("ledger initialized");
        Ok(())
    }

    /// Create a new asset under `asset_id`.
    pub fn create_asset<S>(
        &self,
        store: &mut S,
        asset_id: &str,
        owner: &str,
        type_file: &str,
        base64_file: &str,
    ) -> Result<Asset, RegistryError>
    where
        S: StateStore + ?Sized,
    {
        if self.asset_exists(&*store, asset_id)? {
            tracing::warn!(asset_id, "asset already exists");
            return Err(RegistryError::AlreadyExists(asset_id.to_owned()));
        }

        let asset = Asset::new(asset_id, owner, type_file, base64_file);
        write_asset(store, asset_id, &asset)?;
        tracing::info!(asset_id, owner, "asset created");
        Ok(asset)
    }

    /// Read the asset stored under `asset_id`.
    pub fn read_asset<S>(&self, store: &S, asset_id: &str) -> Result<Asset, RegistryError>
    where
        S: StateStore + ?Sized,
    {
        let bytes = require_present(store, asset_id)?;
        tracing::debug!(asset_id, "asset read");
        decode(asset_id, &bytes)
    }

    /// Replace every attribute of an existing asset.
    ///
    /// This is a full replace, not a merge: `owner`, `type_file` and
    /// `base64_file` are all overwritten even when unchanged.
    pub fn update_asset<S>(
        &self,
        store: &mut S,
        asset_id: &str,
        owner: &str,
        type_file: &str,
        base64_file: &str,
    ) -> Result<Asset, RegistryError>
    where
        S: StateStore + ?Sized,
    {
        require_present(&*store, asset_id)?;

        let asset = Asset::new(asset_id, owner, type_file, base64_file);
        write_asset(store, asset_id, &asset)?;
        tracing::info!(asset_id, owner, "asset updated");
        Ok(asset)
    }

    /// Remove an existing asset.
    pub fn delete_asset<S>(&self, store: &mut S, asset_id: &str) -> Result<(), RegistryError>
    where
        S: StateStore + ?Sized,
    {
        require_present(&*store, asset_id)?;
        store.delete_state(asset_id)?;
        tracing::info!(asset_id, "asset deleted");
        Ok(())
    }

    /// True iff the key is present and maps to a non-empty value.
    ///
    /// Has no domain failure; only a store error can make it fail.
    pub fn asset_exists<S>(&self, store: &S, asset_id: &str) -> Result<bool, RegistryError>
    where
        S: StateStore + ?Sized,
    {
        Ok(load(store, asset_id)?.is_some())
    }

    /// Hand an existing asset to `new_owner`, returning the previous owner.
    ///
    /// The record is written back under `asset_id`, whatever ID the stored
    /// body carries.
    pub fn transfer_asset<S>(
        &self,
        store: &mut S,
        asset_id: &str,
        new_owner: &str,
    ) -> Result<String, RegistryError>
    where
        S: StateStore + ?Sized,
    {
        let bytes = require_present(&*store, asset_id)?;
        let current = decode(asset_id, &bytes)?;

        let transferred = current.with_owner(new_owner);
        write_asset(store, asset_id, &transferred)?;
        tracing::info!(
            asset_id,
            from = current.owner(),
            to = new_owner,
            "asset transferred"
        );
        Ok(current.owner().to_owned())
    }

    /// Every asset on the ledger, in the store's key order.
    ///
    /// One undecodable record fails the whole call; so does a store error
    /// raised part-way through the scan.
    pub fn get_all_assets<S>(&self, store: &S) -> Result<Vec<Asset>, RegistryError>
    where
        S: StateStore + ?Sized,
    {
        self.get_assets_by_range(store, "", "")
    }

    /// Assets with keys in `[start, end)`, in the store's key order. Empty
    /// bounds are unbounded.
    pub fn get_assets_by_range<S>(
        &self,
        store: &S,
        start: &str,
        end: &str,
    ) -> Result<Vec<Asset>, RegistryError>
    where
        S: StateStore + ?Sized,
    {
        let mut assets = Vec::new();
        for entry in store.scan_range(start, end)? {
            let entry = entry?;
            assets.push(decode(&entry.key, &entry.value)?);
        }
        tracing::debug!(start, end, count = assets.len(), "assets scanned");
        Ok(assets)
    }

    /// Canonical JSON array of every asset, in the store's key order.
    pub fn get_all_assets_json<S>(&self, store: &S) -> Result<CanonicalBytes, RegistryError>
    where
        S: StateStore + ?Sized,
    {
        let assets = self.get_all_assets(store)?;
        Ok(CanonicalBytes::new(&assets)?)
    }
}

/// Stored bytes under `key`, with empty values folded into `None`.
fn load<S>(store: &S, key: &str) -> Result<Option<Vec<u8>>, RegistryError>
where
    S: StateStore + ?Sized,
{
    Ok(store.get_state(key)?.filter(|bytes| !bytes.is_empty()))
}

fn require_present<S>(store: &S, asset_id: &str) -> Result<Vec<u8>, RegistryError>
where
    S: StateStore + ?Sized,
{
    load(store, asset_id)?.ok_or_else(|| {
        tracing::warn!(asset_id, "asset does not exist");
        RegistryError::NotFound(asset_id.to_owned())
    })
}

fn decode(key: &str, bytes: &[u8]) -> Result<Asset, RegistryError> {
    Asset::from_canonical(bytes).map_err(|source| RegistryError::Corrupt {
        key: key.to_owned(),
        source,
    })
}

fn write_asset<S>(store: &mut S, key: &str, asset: &Asset) -> Result<(), RegistryError>
where
    S: StateStore + ?Sized,
{
    let canonical = asset.to_canonical()?;
    store.put_state(key, canonical.into_bytes())?;
    Ok(())
}
