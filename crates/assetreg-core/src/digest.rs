//! # Content Digest — Hashes of Ledger Entries
//!
//! Defines `ContentDigest`, the SHA-256 digest of a value's canonical form.
//! Consumers that hash or diff raw ledger entries compare these digests.
//!
//! ## Invariant
//!
//! `ContentDigest` can only be computed from `CanonicalBytes`, so every digest
//! in the system is taken over the canonical member ordering. This is enforced
//! by the function signature of `sha256_digest()`.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// A SHA-256 digest of canonical bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

/// Compute a SHA-256 content digest from canonical bytes.
///
/// Accepts only `&CanonicalBytes`, not raw `&[u8]`, so no code path can
/// digest a non-canonical encoding of a ledger entry.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest { bytes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_sha256_digest_deterministic() {
        let mut data = BTreeMap::new();
        data.insert("a", "1");
        data.insert("b", "2");
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(sha256_digest(&cb), sha256_digest(&cb));
    }

    #[test]
    fn test_hex_format() {
        let cb = CanonicalBytes::new(&serde_json::json!({"key": "value"})).unwrap();
        let hex = sha256_digest(&cb).to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_content_digest_display() {
        let cb = CanonicalBytes::new(&serde_json::json!({"a": "1"})).unwrap();
        let s = sha256_digest(&cb).to_string();
        assert!(s.starts_with("sha256:"));
        assert_eq!(s.len(), 7 + 64);
    }

    #[test]
    fn test_different_inputs_different_digests() {
        let cb1 = CanonicalBytes::new(&serde_json::json!({"a": "1"})).unwrap();
        let cb2 = CanonicalBytes::new(&serde_json::json!({"a": "2"})).unwrap();
        assert_ne!(sha256_digest(&cb1), sha256_digest(&cb2));
    }

    #[test]
    fn test_known_sha256_vector() {
        let cb = CanonicalBytes::new(&serde_json::json!({})).unwrap();
        assert_eq!(cb.as_bytes(), b"{}");
        assert_eq!(
            sha256_digest(&cb).to_hex(),
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );
    }
}
