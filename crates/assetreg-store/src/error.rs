use thiserror::Error;

/// Failure reported by a state store. The registry propagates these verbatim.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem failure in a file-backed store.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file could not be encoded or decoded.
    #[error("state file serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend cannot hold the value written under `key`.
    #[error("invalid value for key {key}: {reason}")]
    InvalidValue {
        /// Key the write was addressed to.
        key: String,
        /// Why the value was refused.
        reason: String,
    },

    /// Any other backend failure, including failures raised mid-scan.
    #[error("backend error: {0}")]
    Backend(String),
}
