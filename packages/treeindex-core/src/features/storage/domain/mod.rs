//! Storage domain: records and the store port

pub mod models;
pub mod ports;

pub use models::{FileIndex, ReferenceRecord, StoreStats, SymbolRecord};
pub use ports::IndexStore;
