//! # State Store Contract
//!
//! The collaborator interface the registry is written against. Each call is
//! atomic on its own; composing several calls into one all-or-nothing unit is
//! the host ledger's responsibility, not this trait's.

use std::ops::Bound;

use crate::error::StoreError;

/// One entry yielded by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// Store key.
    pub key: String,
    /// Raw stored bytes.
    pub value: Vec<u8>,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Lazy, ordered sequence of scan results.
///
/// An `Err` item aborts the scan; consumers must not treat the items seen so
/// far as a complete result.
pub type StateIter<'a> = Box<dyn Iterator<Item = Result<KeyValue, StoreError>> + 'a>;

/// Ordered key-value state supplied by the host ledger.
pub trait StateStore {
    /// Read the value under `key`. `Ok(None)` when the key is absent.
    ///
    /// Some backends cannot distinguish an absent key from an empty value,
    /// so callers should treat `Some(vec![])` the same as `None`.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete_state(&mut self, key: &str) -> Result<(), StoreError>;

    /// Scan `[start, end)` in ascending key order. Empty bounds are unbounded.
    fn scan_range(&self, start: &str, end: &str) -> Result<StateIter<'_>, StoreError>;
}

/// Translate scan arguments into map bounds.
///
/// Returns `None` when the range is empty by construction (`start >= end`
/// with both bounds given), which ordered maps reject rather than treat as
/// an empty range.
pub(crate) fn scan_bounds<'a>(
    start: &'a str,
    end: &'a str,
) -> Option<(Bound<&'a str>, Bound<&'a str>)> {
    if !start.is_empty() && !end.is_empty() && start >= end {
        return None;
    }
    let lower = if start.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Included(start)
    };
    let upper = if end.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Excluded(end)
    };
    Some((lower, upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bounds_are_unbounded() {
        assert_eq!(
            scan_bounds("", ""),
            Some((Bound::Unbounded, Bound::Unbounded))
        );
    }

    #[test]
    fn start_inclusive_end_exclusive() {
        assert_eq!(
            scan_bounds("asset0", "asset9"),
            Some((Bound::Included("asset0"), Bound::Excluded("asset9")))
        );
    }

    #[test]
    fn one_sided_ranges() {
        assert_eq!(
            scan_bounds("b", ""),
            Some((Bound::Included("b"), Bound::Unbounded))
        );
        assert_eq!(
            scan_bounds("", "b"),
            Some((Bound::Unbounded, Bound::Excluded("b")))
        );
    }

    #[test]
    fn inverted_or_equal_bounds_are_empty() {
        assert_eq!(scan_bounds("z", "a"), None);
        assert_eq!(scan_bounds("a", "a"), None);
    }
}
