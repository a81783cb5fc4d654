//! # Registry Errors
//!
//! Two domain failures, `NotFound` and `AlreadyExists`, each carrying the
//! offending asset ID. Everything else (store failures, undecodable stored
//! bytes, serialization failures) is propagated unchanged from the layer that
//! raised it. Nothing here is retried or recovered locally.

use assetreg_core::{CanonicalizationError, DecodeError};
use assetreg_store::StoreError;
use thiserror::Error;

/// The domain failure classes of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetErrorKind {
    /// The operation required the asset to exist and it did not.
    NotFound,
    /// Create required the asset to be absent and it was present.
    AlreadyExists,
}

impl AssetErrorKind {
    /// Stable error code reported to the hosting environment.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "ASSET_NOT_FOUND",
            Self::AlreadyExists => "ASSET_ALREADY_EXISTS",
        }
    }
}

impl std::fmt::Display for AssetErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned by every registry operation.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("asset {0} does not exist")]
    NotFound(String),

    #[error("asset {0} already exists")]
    AlreadyExists(String),

    /// The store collaborator failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A stored value under `key` is not a valid asset record.
    #[error("stored value under key {key} is not a valid asset: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: DecodeError,
    },

    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

impl RegistryError {
    /// The domain failure class, or `None` for propagated collaborator errors.
    pub fn kind(&self) -> Option<AssetErrorKind> {
        match self {
            Self::NotFound(_) => Some(AssetErrorKind::NotFound),
            Self::AlreadyExists(_) => Some(AssetErrorKind::AlreadyExists),
            Self::Store(_) | Self::Corrupt { .. } | Self::Canonicalization(_) => None,
        }
    }

    /// The asset ID a domain failure refers to.
    pub fn asset_id(&self) -> Option<&str> {
        match self {
            Self::NotFound(id) | Self::AlreadyExists(id) => Some(id),
            Self::Corrupt { key, .. } => Some(key),
            Self::Store(_) | Self::Canonicalization(_) => None,
        }
    }
}
