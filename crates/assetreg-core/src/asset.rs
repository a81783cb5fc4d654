//! # Asset Record
//!
//! The unit record managed by the registry: an identity, an owner, and a
//! typed payload. Stored on the ledger as canonical JSON:
//!
//! ```text
//! {"assetID":"a1","base64File":"","owner":"Tomoko","typeFile":"csv"}
//! ```
//!
//! Member order is a compatibility requirement for consumers comparing raw
//! stored bytes. It is produced by `CanonicalBytes`, not by field declaration
//! order (fields are nonetheless declared alphabetically so that the plain
//! `serde_json` form agrees).
//!
//! ## Decoding Policy
//!
//! `from_canonical()` rejects unknown members, missing members, duplicate
//! members, and non-string members. A record that cannot be decoded is an
//! error, never a partially filled value.

use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalBytes;
use crate::digest::{sha256_digest, ContentDigest};
use crate::error::{CanonicalizationError, DecodeError};

/// An immutable asset record.
///
/// Equality and hashing are structural over all four fields. Identity on the
/// ledger is `asset_id` alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Asset {
    #[serde(rename = "assetID")]
    asset_id: String,
    #[serde(rename = "base64File")]
    base64_file: String,
    owner: String,
    #[serde(rename = "typeFile")]
    type_file: String,
}

impl Asset {
    /// Build an asset. Empty strings are accepted for every field.
    pub fn new(
        asset_id: impl Into<String>,
        owner: impl Into<String>,
        type_file: impl Into<String>,
        base64_file: impl Into<String>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            base64_file: base64_file.into(),
            owner: owner.into(),
            type_file: type_file.into(),
        }
    }

    /// Ledger identifier of the asset.
    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    /// Current owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Payload format tag, e.g. a file extension or MIME hint.
    pub fn type_file(&self) -> &str {
        &self.type_file
    }

    /// Base64 payload text, stored as-is (never re-encoded).
    pub fn base64_file(&self) -> &str {
        &self.base64_file
    }

    /// A copy of this asset with a different owner and every other field
    /// unchanged.
    pub fn with_owner(&self, new_owner: impl Into<String>) -> Self {
        Self {
            owner: new_owner.into(),
            ..self.clone()
        }
    }

    /// Serialize to the canonical ledger form.
    pub fn to_canonical(&self) -> Result<CanonicalBytes, CanonicalizationError> {
        CanonicalBytes::new(self)
    }

    /// Decode an asset from stored bytes.
    pub fn from_canonical(bytes: &[u8]) -> Result<Self, DecodeError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(serde_json::from_str(text)?)
    }

    /// SHA-256 digest of the canonical form.
    pub fn digest(&self) -> Result<ContentDigest, CanonicalizationError> {
        Ok(sha256_digest(&self.to_canonical()?))
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The payload can be arbitrarily large; it is never rendered.
        write!(
            f,
            "Asset [assetID={}, owner={}, typeFile={}]",
            self.asset_id, self.owner, self.type_file
        )
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_asset() -> impl Strategy<Value = Asset> {
        ("\\PC{0,16}", "\\PC{0,16}", "[a-z/]{0,12}", "[A-Za-z0-9+/=]{0,64}")
            .prop_map(|(id, owner, kind, payload)| Asset::new(id, owner, kind, payload))
    }

    proptest! {
        #[test]
        fn canonical_roundtrip_any(asset in any_asset()) {
            let cb = asset.to_canonical().unwrap();
            prop_assert_eq!(Asset::from_canonical(cb.as_bytes()).unwrap(), asset);
        }

        #[test]
        fn equal_assets_serialize_identically(asset in any_asset()) {
            let copy = Asset::new(
                asset.asset_id().to_owned(),
                asset.owner().to_owned(),
                asset.type_file().to_owned(),
                asset.base64_file().to_owned(),
            );
            prop_assert_eq!(asset.to_canonical().unwrap(), copy.to_canonical().unwrap());
        }
    }
}
