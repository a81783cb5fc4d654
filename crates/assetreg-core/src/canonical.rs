//! # Canonical Serialization — JCS-Compatible Byte Production
//!
//! This module defines `CanonicalBytes`, the sole construction path for bytes
//! written to the ledger and for bytes fed into digest computation.
//!
//! ## Invariant
//!
//! The `CanonicalBytes` newtype has a private inner field. The only way to
//! construct it is through `CanonicalBytes::new()`, which serializes through
//! `serde_jcs` (RFC 8785, JSON Canonicalization Scheme): object members sorted
//! by name, compact separators, no insignificant whitespace.
//!
//! Most serializers emit members in declaration or insertion order. Sorting
//! here is deliberate: two independently serialized copies of logically equal
//! values must be byte-identical so that consumers can hash or diff ledger
//! entries directly.

use serde::Serialize;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - Object members appear in ascending order of their names, at every depth.
/// - Separators are compact (`,` and `:` with no surrounding whitespace).
/// - The content is valid UTF-8 JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(String);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::SerializationFailed` if the value cannot
    /// be represented as JSON (for example a map with non-string keys).
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let text = serde_jcs::to_string(obj)?;
        Ok(Self(text))
    }

    /// Access the canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Access the canonical text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the owned byte buffer written to the store.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_bytes()
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Display for CanonicalBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_canonical_bytes_sorted_keys() {
        let data = serde_json::json!({"z": "1", "m": "2", "a": "3"});
        let cb = CanonicalBytes::new(&data).expect("should canonicalize");
        assert_eq!(cb.as_str(), r#"{"a":"3","m":"2","z":"1"}"#);
    }

    #[test]
    fn test_canonical_bytes_nested() {
        let data = serde_json::json!({
            "outer": {"b": "2", "a": "1"},
            "list": [{"y": "", "x": ""}]
        });
        let cb = CanonicalBytes::new(&data).expect("should canonicalize");
        assert_eq!(
            cb.as_str(),
            r#"{"list":[{"x":"","y":""}],"outer":{"a":"1","b":"2"}}"#
        );
    }

    #[test]
    fn test_struct_declaration_order_ignored() {
        #[derive(Serialize)]
        struct Reversed {
            zeta: &'static str,
            alpha: &'static str,
        }
        let cb = CanonicalBytes::new(&Reversed {
            zeta: "z",
            alpha: "a",
        })
        .unwrap();
        assert_eq!(cb.as_str(), r#"{"alpha":"a","zeta":"z"}"#);
    }

    #[test]
    fn test_case_sensitive_ordering() {
        // Uppercase code points sort before lowercase ones.
        let data = serde_json::json!({"assetId": "", "assetID": "", "Owner": ""});
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(cb.as_str(), r#"{"Owner":"","assetID":"","assetId":""}"#);
    }

    #[test]
    fn test_empty_object() {
        let data = serde_json::json!({});
        let cb = CanonicalBytes::new(&data).expect("empty object should work");
        assert_eq!(cb.as_bytes(), b"{}");
    }

    #[test]
    fn test_empty_array() {
        let cb = CanonicalBytes::new(&Vec::<String>::new()).unwrap();
        assert_eq!(cb.as_bytes(), b"[]");
    }

    #[test]
    fn test_non_string_map_keys_rejected() {
        let mut data = BTreeMap::new();
        data.insert(vec![1u8], "value");
        assert!(CanonicalBytes::new(&data).is_err());
    }

    #[test]
    fn test_unicode_passthrough() {
        let data = serde_json::json!({"name": "\u{00e9}\u{00e8}"});
        let cb = CanonicalBytes::new(&data).unwrap();
        assert!(cb.as_str().contains('\u{00e9}'));
    }

    #[test]
    fn test_into_bytes_matches_as_bytes() {
        let cb = CanonicalBytes::new(&serde_json::json!({"k": "v"})).unwrap();
        let borrowed = cb.as_bytes().to_vec();
        assert_eq!(cb.into_bytes(), borrowed);
    }

    #[test]
    fn test_len_and_is_empty() {
        let cb = CanonicalBytes::new(&serde_json::json!({"a": "b"})).unwrap();
        assert!(!cb.is_empty());
        assert_eq!(cb.len(), r#"{"a":"b"}"#.len());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Same input always produces the same bytes.
        #[test]
        fn canonical_bytes_deterministic(
            entries in prop::collection::btree_map("[a-zA-Z]{1,8}", "[ -~]{0,16}", 0..8)
        ) {
            let a = CanonicalBytes::new(&entries).unwrap();
            let b = CanonicalBytes::new(&entries).unwrap();
            prop_assert_eq!(a.as_bytes(), b.as_bytes());
        }

        /// Canonical bytes are valid JSON that parses back to the input.
        #[test]
        fn canonical_bytes_valid_json(
            entries in prop::collection::btree_map("[a-z]{1,8}", "\\PC{0,16}", 0..8)
        ) {
            let cb = CanonicalBytes::new(&entries).unwrap();
            let parsed: std::collections::BTreeMap<String, String> =
                serde_json::from_slice(cb.as_bytes()).unwrap();
            prop_assert_eq!(parsed, entries);
        }
    }
}
