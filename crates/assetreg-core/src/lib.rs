#![deny(missing_docs)]

//! # assetreg-core — Foundational Types for the Asset Registry
//!
//! This crate defines the value types every other registry crate builds on.
//! It performs no I/O and depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`Asset` is immutable.** Every "update" builds a new value. Equality
//!    and hashing are structural over all four fields.
//!
//! 2. **`CanonicalBytes` newtype.** Every byte sequence written to the ledger
//!    flows through `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for
//!    stored entries. Two logically equal assets always produce identical bytes.
//!
//! 3. **`sha256_digest()` accepts only `&CanonicalBytes`.** Digests of ledger
//!    entries are always computed over the canonical form.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `assetreg-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod asset;
pub mod canonical;
pub mod digest;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use asset::Asset;
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ContentDigest};
pub use error::{CanonicalizationError, DecodeError};
