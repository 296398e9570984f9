//! Index store
//!
//! Persists the extracted index as three tables (`files`, `symbols`,
//! `"references"`) and serves read-only lookups to the query engine.
//!
//! # Write model
//! Only [`IndexStore::rebuild`] writes. It discards every prior row and
//! repopulates from one build's extractions in a single transaction; rows are
//! never updated in place.
//!
//! # Backends
//! - `SqliteIndexStore` - file or in-memory SQLite (feature `sqlite`)
//! - `InMemoryIndexStore` - `RwLock`ed vectors, for tests and embedding hosts

pub mod domain;
pub mod infrastructure;

pub use domain::{FileIndex, IndexStore, ReferenceRecord, StoreStats, SymbolRecord};
pub use infrastructure::InMemoryIndexStore;
#[cfg(feature = "sqlite")]
pub use infrastructure::SqliteIndexStore;
