//! Feature modules
//!
//! Each feature keeps its domain types, ports (traits) and implementations
//! together:
//! - `ast_model`    - path addressing and traversal over one parsed tree
//! - `parsing`      - parsed-tree adapters (external parser output)
//! - `extraction`   - symbols and references from a tree
//! - `storage`      - index store port, SQLite and in-memory backends
//! - `query_engine` - structural queries over the stored index

pub mod ast_model;
pub mod extraction;
pub mod parsing;
pub mod query_engine;
pub mod storage;
