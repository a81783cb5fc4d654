//! # assetreg-registry — Asset Registry Operations
//!
//! The operation surface of the registry: create, read, update, delete and
//! transfer individual assets, probe existence, list the whole ledger, and
//! seed it with the bootstrap set.
//!
//! Every operation takes the store handle explicitly. There is no ambient
//! or global access to ledger state, and the registry caches nothing: the
//! store is the sole source of truth.
//!
//! ```
//! use assetreg_registry::AssetRegistry;
//! use assetreg_store::MemoryStore;
//!
//! let registry = AssetRegistry::new();
//! let mut store = MemoryStore::new();
//!
//! registry.create_asset(&mut store, "a1", "Tomoko", "csv", "").unwrap();
//! let previous = registry.transfer_asset(&mut store, "a1", "Brad").unwrap();
//! assert_eq!(previous, "Tomoko");
//! assert_eq!(registry.read_asset(&store, "a1").unwrap().owner(), "Brad");
//! ```

pub mod bootstrap;
pub mod error;
pub mod registry;

pub use bootstrap::{AssetSeed, BOOTSTRAP_ASSETS};
pub use error::{AssetErrorKind, RegistryError};
pub use registry::AssetRegistry;
