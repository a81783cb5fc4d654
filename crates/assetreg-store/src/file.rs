//! JSON-file backed state store.
//!
//! The key space is loaded once at open and kept in memory. Every mutation
//! rewrites the whole file by writing `<path>.tmp` and renaming it over the
//! original, so a reader never observes a half-written file.
//!
//! File layout is a single JSON object mapping keys to value text:
//!
//! ```text
//! {
//!   "asset1": "{\"assetID\":\"asset1\",...}"
//! }
//! ```
//!
//! Values must therefore be valid UTF-8; anything else is refused with
//! `StoreError::InvalidValue`.

use std::collections::BTreeMap;
use std::fs;
use std::ops::Bound;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::store::{scan_bounds, KeyValue, StateIter, StateStore};

/// State store persisted to one JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; the file is
    /// created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read(&path)?;
            if raw.is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_slice(&raw)?
            }
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened state file");
        Ok(Self { path, entries })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of keys held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no keys are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let encoded = serde_json::to_vec_pretty(&self.entries)?;
        fs::write(&tmp, encoded)?;
        fs::rename(&tmp, &self.path)?;
        tracing::trace!(
            path = %self.path.display(),
            keys = self.entries.len(),
            "state file written"
        );
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).map(|v| v.clone().into_bytes()))
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let text = String::from_utf8(value).map_err(|e| StoreError::InvalidValue {
            key: key.to_owned(),
            reason: e.to_string(),
        })?;
        let previous = self.entries.insert(key.to_owned(), text);
        if let Err(e) = self.persist() {
            // Keep memory and disk in agreement when the write fails.
            match previous {
                Some(old) => self.entries.insert(key.to_owned(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> Result<(), StoreError> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.persist() {
            self.entries.insert(key.to_owned(), previous);
            return Err(e);
        }
        Ok(())
    }

    fn scan_range(&self, start: &str, end: &str) -> Result<StateIter<'_>, StoreError> {
        let Some(bounds) = scan_bounds(start, end) else {
            return Ok(Box::new(std::iter::empty()));
        };
        let iter = self
            .entries
            .range::<str, (Bound<&str>, Bound<&str>)>(bounds)
            .map(|(k, v)| Ok::<_, StoreError>(KeyValue::new(k.clone(), v.clone().into_bytes())));
        Ok(Box::new(iter))
    }
}
