//! # Error Types
//!
//! Errors raised while producing or parsing the canonical form of registry
//! values. All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.

use thiserror::Error;

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Error while decoding canonical text back into a value.
///
/// Unknown members, missing members, and non-string members are all
/// reported through `Malformed`; the decoder never drops data silently.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The stored bytes are not valid UTF-8.
    #[error("canonical text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The text is not a well-formed asset object.
    #[error("malformed asset record: {0}")]
    Malformed(#[from] serde_json::Error),
}
