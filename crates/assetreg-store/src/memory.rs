//! In-memory state store.
//!
//! Keys live in a `BTreeMap<String, Vec<u8>>`, whose iteration order is the
//! byte-lexical order of the UTF-8 keys. Range scans snapshot the matching
//! entries under the read lock and release it before yielding.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::StoreError;
use crate::store::{scan_bounds, KeyValue, StateIter, StateStore};

/// Shared in-memory key space.
///
/// Cheaply cloneable via `Arc` — all clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held, including keys mapped to empty values.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// True when no keys are held.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl StateStore for MemoryStore {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.inner.read().get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.inner.write().insert(key.to_owned(), value);
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> Result<(), StoreError> {
        self.inner.write().remove(key);
        Ok(())
    }

    fn scan_range(&self, start: &str, end: &str) -> Result<StateIter<'_>, StoreError> {
        let Some(bounds) = scan_bounds(start, end) else {
            return Ok(Box::new(std::iter::empty()));
        };
        let entries: Vec<KeyValue> = self
            .inner
            .read()
            .range::<str, (Bound<&str>, Bound<&str>)>(bounds)
            .map(|(k, v)| KeyValue::new(k.clone(), v.clone()))
            .collect();
        Ok(Box::new(entries.into_iter().map(Ok::<_, StoreError>)))
    }
}
