//! # assetreg-store — Ordered Key-Value State
//!
//! The registry never persists anything itself. It talks to a host-supplied
//! store through the [`StateStore`] trait: point reads, writes and deletes
//! over string keys, plus an ordered range scan.
//!
//! ## Implementations
//!
//! - **`MemoryStore`** (`memory.rs`): `BTreeMap` behind a shared lock.
//!   Cheaply cloneable; all clones see the same data.
//!
//! - **`JsonFileStore`** (`file.rs`): the whole key space kept in one JSON
//!   file, rewritten through a temporary file on every mutation. Used by the
//!   CLI so state survives between invocations.
//!
//! ## Range Semantics
//!
//! `scan_range(start, end)` yields keys in ascending byte-lexical order with
//! `start` inclusive and `end` exclusive. An empty `start` is unbounded below
//! and an empty `end` is unbounded above, so `scan_range("", "")` walks the
//! whole key space.

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{KeyValue, StateIter, StateStore};
